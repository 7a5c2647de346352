//! Parsing and validation of `sliceroute.toml` session configuration files.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`RouteConfig`]: the device dump to scan, the sketch settings a session
//! starts with, and the names used when a netlist is written.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{is_verilog_identifier, load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
