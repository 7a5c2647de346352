//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::RouteConfig;
use std::path::Path;

/// The file name looked up in a configuration directory.
pub const CONFIG_FILE_NAME: &str = "sliceroute.toml";

/// Loads and validates a `sliceroute.toml` configuration from a directory.
///
/// Reads `<dir>/sliceroute.toml`, parses it, and validates its values.
pub fn load_config(dir: &Path) -> Result<RouteConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `sliceroute.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<RouteConfig, ConfigError> {
    let config: RouteConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Returns `true` if `name` matches `[A-Za-z_][A-Za-z0-9_$]*`.
pub fn is_verilog_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn validate_config(config: &RouteConfig) -> Result<(), ConfigError> {
    if config.device.path.as_os_str().is_empty() {
        return Err(ConfigError::MissingField("device.path".to_string()));
    }
    if let Some(ref module) = config.netlist.module {
        if !is_verilog_identifier(module) {
            return Err(ConfigError::ValidationError(format!(
                "netlist.module '{module}' is not a Verilog identifier"
            )));
        }
    }
    if !is_verilog_identifier(&config.netlist.entry_signal) {
        return Err(ConfigError::ValidationError(format!(
            "netlist.entry_signal '{}' is not a Verilog identifier",
            config.netlist.entry_signal
        )));
    }
    if config.netlist.output.as_os_str().is_empty() {
        return Err(ConfigError::MissingField("netlist.output".to_string()));
    }
    Ok(())
}
