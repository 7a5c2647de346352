//! Canonical placement-site names of the form `SLICE_X{x}Y{y}`.

use crate::coord::SiteCoord;

/// The prefix shared by every slice site name.
pub const SITE_PREFIX: &str = "SLICE_";

/// Formats the canonical site name for a coordinate, e.g. `SLICE_X3Y14`.
pub fn site_name(coord: SiteCoord) -> String {
    format!("{SITE_PREFIX}{coord}")
}

/// Parses a full canonical site name back into its coordinate.
///
/// Returns `None` unless the whole string is exactly `SLICE_X<digits>Y<digits>`.
pub fn parse_site_name(name: &str) -> Option<SiteCoord> {
    let rest = name.strip_prefix(SITE_PREFIX)?;
    match split_coord_prefix(rest)? {
        (coord, "") => Some(coord),
        _ => None,
    }
}

/// Parses a leading `X<digits>Y<digits>` from `input`.
///
/// Returns the coordinate and the unconsumed remainder. Digit runs that
/// overflow `u32` are rejected.
pub fn split_coord_prefix(input: &str) -> Option<(SiteCoord, &str)> {
    let rest = input.strip_prefix('X')?;
    let (x, rest) = split_number(rest)?;
    let rest = rest.strip_prefix('Y')?;
    let (y, rest) = split_number(rest)?;
    Some((SiteCoord::new(x, y), rest))
}

fn split_number(input: &str) -> Option<(u32, &str)> {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    let value = input[..end].parse().ok()?;
    Some((value, &input[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_name() {
        assert_eq!(site_name(SiteCoord::new(0, 0)), "SLICE_X0Y0");
        assert_eq!(site_name(SiteCoord::new(12, 103)), "SLICE_X12Y103");
    }

    #[test]
    fn parses_name() {
        assert_eq!(parse_site_name("SLICE_X12Y103"), Some(SiteCoord::new(12, 103)));
    }

    #[test]
    fn rejects_trailing_text() {
        assert_eq!(parse_site_name("SLICE_X1Y2_extra"), None);
        assert_eq!(parse_site_name("SLICE_X1"), None);
        assert_eq!(parse_site_name("SLICE_XY2"), None);
        assert_eq!(parse_site_name("LUT_X1Y2"), None);
    }

    #[test]
    fn split_keeps_remainder() {
        let (coord, rest) = split_coord_prefix("X4Y5\", BEL=\"A5LUT\"").unwrap();
        assert_eq!(coord, SiteCoord::new(4, 5));
        assert_eq!(rest, "\", BEL=\"A5LUT\"");
    }

    #[test]
    fn overflow_is_rejected() {
        assert_eq!(split_coord_prefix("X99999999999Y0"), None);
    }
}
