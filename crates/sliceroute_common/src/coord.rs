//! Integer grid coordinates for placement sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A zero-based `(x, y)` position of a placement site in a normalized grid.
///
/// Ordering is by `x` first, then `y`, which is the order sites are listed
/// in by the device site grid.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct SiteCoord {
    /// Column index.
    pub x: u32,
    /// Row index.
    pub y: u32,
}

impl SiteCoord {
    /// Creates a coordinate from its column and row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for SiteCoord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<SiteCoord> for (u32, u32) {
    fn from(coord: SiteCoord) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for SiteCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X{}Y{}", self.x, self.y)
    }
}
