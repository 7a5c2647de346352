//! Structural Verilog codec for hand-drawn routing paths.
//!
//! [`generate`] turns an ordered list of site paths into a chain-of-LUT6
//! netlist in which every cell is pinned to its site with a `LOC` constraint,
//! optionally fanned out into up to four parallel lanes. [`parse`] recovers the
//! paths from that text again: it only understands the dialect [`generate`]
//! writes, and skips everything else rather than failing.
//!
//! The two directions are inverses for any list of paths with no repeated
//! site inside a path: `parse(&generate(paths, opts).text) == paths`.

#![warn(missing_docs)]

pub mod generate;
mod names;
pub mod parse;

pub use generate::{generate, GeneratedNetlist, NetlistOptions};
pub use parse::{parse, parse_with_diagnostics};
