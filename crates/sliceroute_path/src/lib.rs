//! The editable routing sketch.
//!
//! A [`PathModel`] holds an ordered list of [`Segment`]s, each an ordered run
//! of grid sites. Selecting a site appends it to the active (last) segment,
//! first synthesizing evenly spaced intermediate sites between it and the
//! previous one. Every mutation returns a [`PathDelta`] describing what
//! changed so a front end can redraw without inspecting the model.
//!
//! The model bridges to the netlist codec: [`PathModel::generate`] emits the
//! current sketch and [`PathModel::import`] bulk-loads one back.

#![warn(missing_docs)]

pub mod delta;
pub mod error;
pub mod event;
pub mod model;
pub mod segment;
pub mod settings;

pub use delta::PathDelta;
pub use error::PathError;
pub use event::SketchEvent;
pub use model::PathModel;
pub use segment::{PathPoint, PointKind, Segment};
pub use settings::IntermediateCount;
