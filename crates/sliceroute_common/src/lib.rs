//! Shared foundational types used across the sliceroute crates.
//!
//! This crate provides grid coordinates for placement sites, the canonical
//! `SLICE_X{x}Y{y}` site naming scheme, and the lane table used when a chain
//! is fanned out into parallel redundant copies.

#![warn(missing_docs)]

pub mod coord;
pub mod lane;
pub mod site_name;

pub use coord::SiteCoord;
pub use lane::{Lane, LaneError, ParallelWires};
pub use site_name::{parse_site_name, site_name, split_coord_prefix, SITE_PREFIX};
