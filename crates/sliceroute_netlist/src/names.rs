//! Signal, instance, and marker spellings shared by the generator and parser.

use sliceroute_common::Lane;

/// Word that opens a segment boundary comment.
pub(crate) const SEGMENT_WORD: &str = "SEGMENT ";

/// Word that closes a segment boundary comment.
pub(crate) const BEGINNING_WORD: &str = " BEGINNING";

/// Attribute prefix carrying a cell's site.
pub(crate) const LOC_ATTR: &str = "LOC=\"";

/// `None` is the single unlabeled lane used when there is no fan-out.
pub(crate) type LaneTag = Option<Lane>;

pub(crate) fn segment_input(segment: usize, lane: LaneTag) -> String {
    match lane {
        None => format!("seg_{segment}_in"),
        Some(lane) => format!("seg_{segment}_in_LUT_{}", lane.letter()),
    }
}

pub(crate) fn stage_output(stage: usize, lane: LaneTag) -> String {
    match lane {
        None => format!("wire_{stage}"),
        Some(lane) => format!("wire_{stage}_lut_{}", lane.lower()),
    }
}

pub(crate) fn cell_instance(stage: usize, lane: LaneTag) -> String {
    match lane {
        None => format!("lut_{stage}"),
        Some(lane) => format!("lut_{stage}_{}", lane.lower()),
    }
}

pub(crate) fn segment_marker(segment: usize) -> String {
    format!("///// {SEGMENT_WORD}{segment}{BEGINNING_WORD} /////")
}
