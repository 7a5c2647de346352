//! Configuration types deserialized from `sliceroute.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sliceroute_common::ParallelWires;
use sliceroute_path::IntermediateCount;

/// The top-level configuration parsed from `sliceroute.toml`.
#[derive(Debug, Deserialize)]
pub struct RouteConfig {
    /// Which device dump supplies the site grid.
    pub device: DeviceConfig,
    /// Settings a fresh sketch starts with.
    #[serde(default)]
    pub sketch: SketchConfig,
    /// Names and destination for generated netlists.
    #[serde(default)]
    pub netlist: NetlistConfig,
}

/// The `[device]` section.
#[derive(Debug, Deserialize)]
pub struct DeviceConfig {
    /// Path to the textual device description, relative to the config file.
    pub path: PathBuf,
}

/// The `[sketch]` section.
#[derive(Debug, Default, Deserialize)]
pub struct SketchConfig {
    /// Sites synthesized between consecutive selections.
    #[serde(default)]
    pub intermediate_count: IntermediateCount,
    /// Parallel LUT chains per stage.
    #[serde(default)]
    pub parallel_wires: ParallelWires,
}

/// The `[netlist]` section.
#[derive(Debug, Deserialize)]
pub struct NetlistConfig {
    /// Module name; derived from the output file stem when absent.
    #[serde(default)]
    pub module: Option<String>,
    /// Name of the module's input port feeding segment 0.
    #[serde(default = "default_entry_signal")]
    pub entry_signal: String,
    /// Where `route` writes the netlist.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for NetlistConfig {
    fn default() -> Self {
        Self {
            module: None,
            entry_signal: default_entry_signal(),
            output: default_output(),
        }
    }
}

fn default_entry_signal() -> String {
    "antenna_in".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("sketch_route.v")
}

/// Derives a Verilog module name from a file's stem.
///
/// Characters that cannot appear in an identifier become `_`, and a stem that
/// starts with a digit gets a leading `_`. An empty stem yields `sketch_route`.
pub fn module_name_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if stem.is_empty() {
        return "sketch_route".to_string();
    }
    let mut name: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if name.starts_with(|c: char| c.is_ascii_digit() || c == '$') {
        name.insert(0, '_');
    }
    name
}
