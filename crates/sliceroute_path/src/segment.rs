//! One continuous drawn path of sites.

use serde::{Deserialize, Serialize};
use sliceroute_common::SiteCoord;

/// How a point entered a segment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PointKind {
    /// Selected by the operator, or bulk-loaded.
    Endpoint,
    /// Synthesized between two selections.
    Interpolated,
}

/// A site in a segment together with its origin.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct PathPoint {
    /// The site's grid coordinate.
    pub coord: SiteCoord,
    /// Whether the point was selected or synthesized.
    pub kind: PointKind,
}

impl PathPoint {
    /// An operator-selected point.
    pub fn endpoint(coord: SiteCoord) -> Self {
        Self {
            coord,
            kind: PointKind::Endpoint,
        }
    }

    /// A synthesized point.
    pub fn interpolated(coord: SiteCoord) -> Self {
        Self {
            coord,
            kind: PointKind::Interpolated,
        }
    }
}

/// An ordered run of sites; insertion order is chain order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    points: Vec<PathPoint>,
}

impl Segment {
    /// Creates an empty segment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The points in path order.
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// The coordinates in path order.
    pub fn coords(&self) -> impl Iterator<Item = SiteCoord> + '_ {
        self.points.iter().map(|p| p.coord)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the segment has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recently appended coordinate.
    pub fn last(&self) -> Option<SiteCoord> {
        self.points.last().map(|p| p.coord)
    }

    /// Returns `true` if the coordinate already occurs in this segment.
    pub fn contains(&self, coord: SiteCoord) -> bool {
        self.points.iter().any(|p| p.coord == coord)
    }

    pub(crate) fn push(&mut self, point: PathPoint) {
        self.points.push(point);
    }

    /// Removes up to `count` trailing points, returning their coordinates
    /// newest first.
    pub(crate) fn pop_back(&mut self, count: usize) -> Vec<SiteCoord> {
        let keep = self.points.len().saturating_sub(count);
        self.points.drain(keep..).rev().map(|p| p.coord).collect()
    }
}

impl FromIterator<PathPoint> for Segment {
    fn from_iter<I: IntoIterator<Item = PathPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
