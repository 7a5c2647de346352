//! Netlist parsing: recover site paths from generated Verilog.
//!
//! Parsing is line-oriented and permissive. A line carrying a segment boundary
//! marker opens a new segment; a line carrying a `LOC="SLICE_X<x>Y<y>"`
//! constraint appends that site to the open segment. Every other line is
//! ignored. Lane fan-out emits one constraint per lane for the same position
//! on consecutive cells, so a site equal to the segment's last site is
//! dropped.

use sliceroute_common::{parse_site_name, SiteCoord};
use sliceroute_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Location};

use crate::names::{BEGINNING_WORD, LOC_ATTR, SEGMENT_WORD};

/// Parses netlist text into segments of site coordinates.
///
/// Never fails: text without segment markers yields an empty list.
pub fn parse(text: &str) -> Vec<Vec<SiteCoord>> {
    parse_with_diagnostics(text, &DiagnosticSink::new())
}

/// Like [`parse`], reporting skipped placements and renumbered segments to `sink`.
pub fn parse_with_diagnostics(text: &str, sink: &DiagnosticSink) -> Vec<Vec<SiteCoord>> {
    let mut segments: Vec<Vec<SiteCoord>> = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let location = Location::Line(number + 1);

        if let Some(index) = segment_marker(line) {
            if index != segments.len() {
                sink.emit(
                    Diagnostic::note(
                        DiagnosticCode::SEGMENT_OUT_OF_SEQUENCE,
                        format!(
                            "segment marker {index} found where segment {} was expected",
                            segments.len()
                        ),
                    )
                    .at(location)
                    .with_note("segments are loaded in file order"),
                );
            }
            segments.push(Vec::new());
            continue;
        }

        let Some(coord) = placement_site(line) else {
            continue;
        };
        match segments.last_mut() {
            Some(segment) => {
                if segment.last() != Some(&coord) {
                    segment.push(coord);
                }
            }
            None => sink.emit(
                Diagnostic::warning(
                    DiagnosticCode::ORPHAN_PLACEMENT,
                    format!("placement at {coord} precedes any segment marker, ignored"),
                )
                .at(location),
            ),
        }
    }

    log::debug!(
        "parsed {} segments, {} sites",
        segments.len(),
        segments.iter().map(Vec::len).sum::<usize>()
    );
    segments
}

/// Returns the index of a `SEGMENT <n> BEGINNING` marker on this line.
fn segment_marker(line: &str) -> Option<usize> {
    line.match_indices(SEGMENT_WORD).find_map(|(pos, word)| {
        let rest = &line[pos + word.len()..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let index = rest[..end].parse().ok()?;
        rest[end..].starts_with(BEGINNING_WORD).then_some(index)
    })
}

/// Returns the site named by a `LOC="SLICE_X<x>Y<y>"` constraint on this line.
fn placement_site(line: &str) -> Option<SiteCoord> {
    let start = line.find(LOC_ATTR)? + LOC_ATTR.len();
    let rest = &line[start..];
    let end = rest.find('"')?;
    parse_site_name(&rest[..end])
}
