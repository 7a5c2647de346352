//! Where a diagnostic points: a grid site or a line of netlist text.

use serde::{Deserialize, Serialize};
use sliceroute_common::SiteCoord;
use std::fmt;

/// The subject of a diagnostic.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Location {
    /// A grid coordinate, which may or may not hold a site.
    Site(SiteCoord),
    /// A 1-based line number in netlist text.
    Line(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Site(coord) => write!(f, "site {coord}"),
            Location::Line(line) => write!(f, "line {line}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", Location::Site(SiteCoord::new(1, 2))), "site X1Y2");
        assert_eq!(format!("{}", Location::Line(12)), "line 12");
    }
}
