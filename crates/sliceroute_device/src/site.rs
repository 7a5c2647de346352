//! A single addressable placement site.

use serde::{Deserialize, Serialize};
use sliceroute_common::{site_name, SiteCoord};

/// An addressable slice site: a grid coordinate plus its canonical name.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Site {
    /// Normalized grid position.
    pub coord: SiteCoord,
    /// Placement identifier, e.g. `SLICE_X3Y14`.
    pub name: String,
}

impl Site {
    /// Creates a site whose name is derived from its coordinate.
    pub fn new(coord: SiteCoord) -> Self {
        Self {
            coord,
            name: site_name(coord),
        }
    }
}
