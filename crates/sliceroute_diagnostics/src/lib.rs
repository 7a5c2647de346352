//! Diagnostic creation, severity management, and terminal rendering.
//!
//! Sketch editing and netlist import never fail outright on bad input; they
//! skip the offending point or line and report a structured [`Diagnostic`]
//! instead. The thread-safe [`DiagnosticSink`] accumulates those reports for
//! the caller to display, and [`TerminalRenderer`] formats them.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod location;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use location::Location;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
