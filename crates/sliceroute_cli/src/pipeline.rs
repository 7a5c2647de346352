//! Shared pipeline helpers for CLI commands.
//!
//! Locates and loads `sliceroute.toml`, merges it with command-line
//! overrides, scans the device dump, and renders diagnostics.

use std::path::{Path, PathBuf};

use sliceroute_config::{NetlistConfig, RouteConfig, SketchConfig, CONFIG_FILE_NAME};
use sliceroute_device::SiteGrid;
use sliceroute_diagnostics::{DiagnosticRenderer, DiagnosticSink, TerminalRenderer};

use crate::GlobalArgs;

/// Session settings after merging the config file with its defaults.
///
/// Paths from a config file are resolved against the file's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Device dump to scan.
    pub device: Option<PathBuf>,
    /// Intermediate sites per selection.
    pub intermediate_count: u8,
    /// Parallel chains per stage.
    pub wires: u8,
    /// Explicit module name, if configured.
    pub module: Option<String>,
    /// Input port feeding segment 0.
    pub entry_signal: String,
    /// Default netlist destination.
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        let sketch = SketchConfig::default();
        let netlist = NetlistConfig::default();
        Self {
            device: None,
            intermediate_count: sketch.intermediate_count.get(),
            wires: sketch.parallel_wires.get(),
            module: netlist.module,
            entry_signal: netlist.entry_signal,
            output: netlist.output,
        }
    }
}

impl Settings {
    fn from_config(config: &RouteConfig, dir: &Path) -> Self {
        Self {
            device: Some(dir.join(&config.device.path)),
            intermediate_count: config.sketch.intermediate_count.get(),
            wires: config.sketch.parallel_wires.get(),
            module: config.netlist.module.clone(),
            entry_signal: config.netlist.entry_signal.clone(),
            output: dir.join(&config.netlist.output),
        }
    }

    /// The device path, or an error telling the user how to supply one.
    pub fn device_path(&self) -> Result<&Path, Box<dyn std::error::Error>> {
        self.device.as_deref().ok_or_else(|| {
            format!("no device given: pass --device or set [device] path in {CONFIG_FILE_NAME}")
                .into()
        })
    }
}

/// Walks up from `start` looking for the nearest directory containing `sliceroute.toml`.
pub fn find_config_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Resolves the configuration directory from global CLI args.
///
/// If `--config` is specified, uses that path (file → parent dir, dir → itself)
/// and the file must exist. Otherwise walks up from the current directory; no
/// config found there is not an error.
pub fn resolve_config_dir(
    global: &GlobalArgs,
) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            Ok(Some(
                p.parent()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| PathBuf::from(".")),
            ))
        } else {
            Ok(Some(p))
        }
    } else {
        Ok(find_config_dir(&std::env::current_dir()?))
    }
}

/// Loads settings from the resolved config, or defaults when there is none.
///
/// A `--device` flag replaces the configured device.
pub fn resolve_settings(
    global: &GlobalArgs,
    device: Option<&str>,
) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = match resolve_config_dir(global)? {
        Some(dir) => {
            let config = sliceroute_config::load_config(&dir)?;
            log::debug!("loaded {}", dir.join(CONFIG_FILE_NAME).display());
            Settings::from_config(&config, &dir)
        }
        None => {
            log::debug!("no {CONFIG_FILE_NAME} found, using defaults");
            Settings::default()
        }
    };
    if let Some(device) = device {
        settings.device = Some(PathBuf::from(device));
    }
    Ok(settings)
}

/// Scans the device dump named by `settings` into a site grid.
pub fn load_grid(
    settings: &Settings,
    global: &GlobalArgs,
) -> Result<SiteGrid, Box<dyn std::error::Error>> {
    let path = settings.device_path()?;
    if !global.quiet {
        eprintln!("   Scanning {}", path.display());
    }
    let grid = SiteGrid::from_device_file(path)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(grid)
}

/// Renders all diagnostics from a sink to stderr using the terminal renderer.
///
/// Returns the number of diagnostics rendered.
pub fn render_diagnostics(sink: &DiagnosticSink, color: bool) -> usize {
    let diagnostics = sink.diagnostics();
    let renderer = TerminalRenderer::new(color);
    for diag in &diagnostics {
        eprintln!("{}", renderer.render(diag));
    }
    diagnostics.len()
}
