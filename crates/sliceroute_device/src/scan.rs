//! Extraction of slice sites from a textual device description.
//!
//! Device dumps (XDLRC and similar) mention every slice site by name many times
//! over. Scanning collects each distinct `SLICE_X<x>Y<y>` once, in first-seen
//! order, without interpreting the surrounding syntax.

use std::collections::HashSet;

use sliceroute_common::{split_coord_prefix, SiteCoord, SITE_PREFIX};

/// Collects every distinct slice coordinate named in `text`.
///
/// Matching is ASCII case-insensitive. Coordinates are returned as written in
/// the dump, before normalization.
pub fn scan_device(text: &str) -> Vec<SiteCoord> {
    let upper = text.to_ascii_uppercase();
    let mut seen = HashSet::new();
    let mut coords = Vec::new();

    let mut rest = upper.as_str();
    while let Some(pos) = rest.find(SITE_PREFIX) {
        rest = &rest[pos + SITE_PREFIX.len()..];
        if let Some((coord, tail)) = split_coord_prefix(rest) {
            if seen.insert(coord) {
                coords.push(coord);
            }
            rest = tail;
        }
    }
    log::debug!("scanned {} distinct slice sites", coords.len());
    coords
}

/// Shifts coordinates so the minimum `x` and minimum `y` become zero.
///
/// Returns the subtracted offset and the shifted coordinates, or `None` for an
/// empty input.
pub fn normalize(raw: &[SiteCoord]) -> Option<(SiteCoord, Vec<SiteCoord>)> {
    let min_x = raw.iter().map(|c| c.x).min()?;
    let min_y = raw.iter().map(|c| c.y).min()?;
    let shifted = raw
        .iter()
        .map(|c| SiteCoord::new(c.x - min_x, c.y - min_y))
        .collect();
    Some((SiteCoord::new(min_x, min_y), shifted))
}
