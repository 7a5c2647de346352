//! sliceroute: place hand-drawn LUT chains on a Xilinx slice grid.
//!
//! Provides `sliceroute grid` to inspect the sites a device dump yields,
//! `sliceroute route` to replay a scripted sketch and write the placed
//! netlist, and `sliceroute import` to recover a sketch from a netlist.

#![warn(missing_docs)]

mod grid;
mod import;
mod pipeline;
mod route;
mod script;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// sliceroute: sketch routes as chains of pass-through LUTs.
#[derive(Parser, Debug)]
#[command(name = "sliceroute", version, about = "Hand-placed LUT chain routing")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `sliceroute.toml` file or the directory holding one.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a device dump and describe its site grid.
    Grid(GridArgs),
    /// Replay an event script and write the generated netlist.
    Route(RouteArgs),
    /// Load a generated netlist back into a sketch.
    Import(ImportArgs),
}

/// Arguments for the `sliceroute grid` subcommand.
#[derive(Parser, Debug)]
pub struct GridArgs {
    /// Device description to scan (overrides `[device] path`).
    #[arg(short, long)]
    pub device: Option<String>,
}

/// Arguments for the `sliceroute route` subcommand.
#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Event script, one event per line.
    pub script: String,

    /// Device description to scan (overrides `[device] path`).
    #[arg(short, long)]
    pub device: Option<String>,

    /// Output netlist path (overrides `[netlist] output`).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Module name (default: configured, else the output file stem).
    #[arg(short, long)]
    pub module: Option<String>,

    /// Intermediate sites per selection, 0 to 5.
    #[arg(short, long)]
    pub intermediates: Option<u8>,

    /// Parallel LUT chains, 1 to 4.
    #[arg(short, long)]
    pub wires: Option<u8>,
}

/// Arguments for the `sliceroute import` subcommand.
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Netlist previously written by `sliceroute route`.
    pub netlist: String,

    /// Device description to scan (overrides `[device] path`).
    #[arg(short, long)]
    pub device: Option<String>,

    /// Output format for the recovered segments.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Regenerate the netlist to this path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Parallel LUT chains for regeneration, 1 to 4.
    #[arg(short, long)]
    pub wires: Option<u8>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };
    init_logging(&global);

    let result = match cli.command {
        Command::Grid(ref args) => grid::run(args, &global),
        Command::Route(ref args) => route::run(args, &global),
        Command::Import(ref args) => import::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr logger; `RUST_LOG` takes precedence over the flags.
fn init_logging(global: &GlobalArgs) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level(global)),
    )
    .format_timestamp(None)
    .init();
}

fn log_level(global: &GlobalArgs) -> &'static str {
    if global.quiet {
        "error"
    } else if global.verbose {
        "debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_grid_default() {
        let cli = Cli::parse_from(["sliceroute", "grid"]);
        match cli.command {
            Command::Grid(ref args) => assert!(args.device.is_none()),
            _ => panic!("expected Grid command"),
        }
    }

    #[test]
    fn parse_route_with_args() {
        let cli = Cli::parse_from([
            "sliceroute",
            "route",
            "sketch.txt",
            "--device",
            "xc6slx75.xdlrc",
            "-o",
            "out/chain.v",
            "--module",
            "chain",
            "--intermediates",
            "2",
            "--wires",
            "4",
        ]);
        match cli.command {
            Command::Route(ref args) => {
                assert_eq!(args.script, "sketch.txt");
                assert_eq!(args.device.as_deref(), Some("xc6slx75.xdlrc"));
                assert_eq!(args.output.as_deref(), Some("out/chain.v"));
                assert_eq!(args.module.as_deref(), Some("chain"));
                assert_eq!(args.intermediates, Some(2));
                assert_eq!(args.wires, Some(4));
            }
            _ => panic!("expected Route command"),
        }
    }

    #[test]
    fn parse_route_requires_script() {
        assert!(Cli::try_parse_from(["sliceroute", "route"]).is_err());
    }

    #[test]
    fn parse_import_default() {
        let cli = Cli::parse_from(["sliceroute", "import", "chain.v"]);
        match cli.command {
            Command::Import(ref args) => {
                assert_eq!(args.netlist, "chain.v");
                assert_eq!(args.format, ReportFormat::Text);
                assert!(args.output.is_none());
                assert!(args.wires.is_none());
            }
            _ => panic!("expected Import command"),
        }
    }

    #[test]
    fn parse_import_json() {
        let cli = Cli::parse_from(["sliceroute", "import", "chain.v", "--format", "json"]);
        match cli.command {
            Command::Import(ref args) => assert_eq!(args.format, ReportFormat::Json),
            _ => panic!("expected Import command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["sliceroute", "--quiet", "--color", "never", "grid"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["sliceroute", "grid", "--config", "/work/sliceroute.toml"]);
        assert_eq!(cli.config.as_deref(), Some("/work/sliceroute.toml"));
    }

    #[test]
    fn wire_count_must_be_a_byte() {
        assert!(Cli::try_parse_from(["sliceroute", "route", "s.txt", "--wires", "999"]).is_err());
    }

    #[test]
    fn log_level_follows_flags() {
        let mut global = GlobalArgs {
            quiet: false,
            verbose: false,
            color: false,
            config: None,
        };
        assert_eq!(log_level(&global), "warn");
        global.verbose = true;
        assert_eq!(log_level(&global), "debug");
        global.quiet = true;
        assert_eq!(log_level(&global), "error");
    }
}
