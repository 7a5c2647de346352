//! Change notifications returned by every model mutation.

use serde::{Deserialize, Serialize};
use sliceroute_common::SiteCoord;

use crate::segment::PathPoint;

/// What a mutation changed, in enough detail to redraw incrementally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathDelta {
    /// Nothing changed (invalid site, undo on an empty segment, a setting).
    Unchanged,
    /// Points were appended to a segment, in order: intermediates, then the
    /// selected endpoint.
    Extended {
        /// Index of the segment that grew.
        segment: usize,
        /// The appended points in insertion order.
        points: Vec<PathPoint>,
    },
    /// Points were removed from the end of a segment.
    Retracted {
        /// Index of the segment that shrank.
        segment: usize,
        /// The removed coordinates, most recent first.
        points: Vec<SiteCoord>,
        /// Whether the segment became empty and was dropped.
        segment_removed: bool,
    },
    /// A new empty segment became active.
    SegmentOpened {
        /// Index of the new segment.
        segment: usize,
    },
    /// All segments were replaced; redraw from scratch.
    Reset {
        /// Number of segments now held.
        segments: usize,
    },
}

impl PathDelta {
    /// Returns `true` if the model was not modified.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, PathDelta::Unchanged)
    }
}
