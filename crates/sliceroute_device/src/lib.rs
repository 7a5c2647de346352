//! The device placement-site grid.
//!
//! A [`SiteGrid`] is the immutable set of addressable slice sites a sketch can
//! be drawn on. It is built once per session, either from already-normalized
//! sites or by [scanning](scan_device) a textual device description for
//! `SLICE_X<x>Y<y>` identifiers, and is then shared by reference with the path
//! model and the netlist codec.

#![warn(missing_docs)]

pub mod error;
pub mod grid;
pub mod scan;
pub mod site;

pub use error::GridError;
pub use grid::SiteGrid;
pub use scan::{normalize, scan_device};
pub use site::Site;
