//! The path model: segments, interpolation, undo, and bulk loading.

use sliceroute_common::{ParallelWires, SiteCoord};
use sliceroute_device::SiteGrid;
use sliceroute_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Location};
use sliceroute_netlist::{generate, parse_with_diagnostics, GeneratedNetlist, NetlistOptions};

use crate::delta::PathDelta;
use crate::error::PathError;
use crate::segment::{PathPoint, Segment};
use crate::settings::IntermediateCount;

/// The editable sketch: an ordered list of segments over a site grid.
///
/// The model always holds at least one segment, and the last one is active:
/// it receives every selection. Coordinates stored in any segment are
/// guaranteed to exist in the grid. Skipped input is reported through
/// [`diagnostics`](Self::diagnostics) rather than as an error.
#[derive(Debug)]
pub struct PathModel<'g> {
    grid: &'g SiteGrid,
    segments: Vec<Segment>,
    intermediate_count: IntermediateCount,
    parallel_wires: ParallelWires,
    sink: DiagnosticSink,
}

impl<'g> PathModel<'g> {
    /// Creates a model with one empty segment, no intermediates and one wire.
    pub fn new(grid: &'g SiteGrid) -> Self {
        Self {
            grid,
            segments: vec![Segment::new()],
            intermediate_count: IntermediateCount::default(),
            parallel_wires: ParallelWires::SINGLE,
            sink: DiagnosticSink::new(),
        }
    }

    /// The grid this model draws on.
    pub fn grid(&self) -> &'g SiteGrid {
        self.grid
    }

    /// All segments in order; segment 0 is fed by the entry signal.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Index of the segment receiving selections.
    pub fn active_index(&self) -> usize {
        self.segments.len() - 1
    }

    /// The segment receiving selections.
    pub fn active_segment(&self) -> &Segment {
        &self.segments[self.active_index()]
    }

    /// Total number of points across all segments.
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    /// Diagnostics for input that was skipped.
    ///
    /// The sink accumulates for the lifetime of the model; neither
    /// [`clear`](Self::clear) nor [`load`](Self::load) empties it. Drain it
    /// with [`DiagnosticSink::take_all`] after each batch of work.
    pub fn diagnostics(&self) -> &DiagnosticSink {
        &self.sink
    }

    /// Number of sites synthesized between consecutive selections.
    pub fn intermediate_count(&self) -> u8 {
        self.intermediate_count.get()
    }

    /// Sets the number of synthesized intermediate sites, `0..=5`.
    pub fn set_intermediate_count(&mut self, count: u8) -> Result<(), PathError> {
        self.intermediate_count = IntermediateCount::new(count)?;
        log::debug!("intermediate count set to {count}");
        Ok(())
    }

    /// Fan-out width used by [`generate`](Self::generate).
    pub fn parallel_wires(&self) -> ParallelWires {
        self.parallel_wires
    }

    /// Sets the fan-out width, `1..=4`.
    pub fn set_parallel_wires(&mut self, wires: u8) -> Result<(), PathError> {
        self.parallel_wires = ParallelWires::new(wires)?;
        log::debug!("parallel wires set to {wires}");
        Ok(())
    }

    /// Appends a selected site to the active segment.
    ///
    /// When the segment already has a last point, the configured number of
    /// intermediate sites are synthesized first at evenly spaced fractions
    /// of the straight line between the two, rounded and clamped to the
    /// grid bounds. An intermediate is skipped when it is already in the
    /// segment, and skipped with a warning when no site exists there. The
    /// selected site itself is always appended.
    ///
    /// A coordinate with no site is ignored and the model is unchanged.
    pub fn select(&mut self, coord: SiteCoord) -> PathDelta {
        if !self.grid.contains(coord) {
            log::debug!("select {coord}: no site, ignored");
            return PathDelta::Unchanged;
        }

        let index = self.active_index();
        let count = self.intermediate_count.get();
        let segment = &mut self.segments[index];
        let mut added = Vec::new();

        if let Some(previous) = segment.last() {
            for point in interpolate(self.grid, previous, coord, count) {
                if segment.contains(point) {
                    log::trace!("intermediate {point} already in segment {index}");
                    continue;
                }
                if !self.grid.contains(point) {
                    self.sink.emit(
                        Diagnostic::warning(
                            DiagnosticCode::MISSING_INTERPOLATED_SITE,
                            format!("no site at intermediate point {point}, skipped"),
                        )
                        .at(Location::Site(point)),
                    );
                    continue;
                }
                let point = PathPoint::interpolated(point);
                segment.push(point);
                added.push(point);
            }
        }

        let endpoint = PathPoint::endpoint(coord);
        segment.push(endpoint);
        added.push(endpoint);

        log::debug!(
            "select {coord}: segment {index} +{} points (now {})",
            added.len(),
            segment.len()
        );
        PathDelta::Extended {
            segment: index,
            points: added,
        }
    }

    /// Removes the newest points of the active segment.
    ///
    /// One point plus up to the current intermediate count are popped,
    /// stopping when the segment is empty. The count is read at undo time,
    /// so a selection whose intermediates were skipped, or a count changed
    /// since the selection, removes more or fewer points than were added.
    /// A segment emptied this way is dropped, and a model left with no
    /// segments gets a fresh empty one. Undo on an empty active segment does
    /// nothing.
    pub fn undo(&mut self) -> PathDelta {
        let index = self.active_index();
        let count = 1 + usize::from(self.intermediate_count.get());
        let segment = &mut self.segments[index];
        if segment.is_empty() {
            return PathDelta::Unchanged;
        }

        let removed = segment.pop_back(count);
        let segment_removed = segment.is_empty();
        if segment_removed {
            self.segments.pop();
            if self.segments.is_empty() {
                self.segments.push(Segment::new());
            }
        }

        log::debug!(
            "undo: segment {index} -{} points{}",
            removed.len(),
            if segment_removed { ", segment removed" } else { "" }
        );
        PathDelta::Retracted {
            segment: index,
            points: removed,
            segment_removed,
        }
    }

    /// Opens a new empty segment and makes it active.
    pub fn new_segment(&mut self) -> PathDelta {
        self.segments.push(Segment::new());
        let segment = self.active_index();
        log::debug!("opened segment {segment}");
        PathDelta::SegmentOpened { segment }
    }

    /// Discards every segment, leaving one empty segment.
    pub fn clear(&mut self) -> PathDelta {
        self.segments = vec![Segment::new()];
        log::debug!("cleared sketch");
        PathDelta::Reset { segments: 1 }
    }

    /// Replaces the sketch with fully expanded segments.
    ///
    /// Coordinates are appended as given, without interpolation. A coordinate
    /// with no site is skipped with a warning. The result holds exactly the
    /// loaded segments, with no leading empty segment before them; an empty
    /// input leaves one empty segment.
    pub fn load<I, S>(&mut self, segments: I) -> PathDelta
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = SiteCoord>,
    {
        self.segments.clear();
        for input in segments {
            let mut segment = Segment::new();
            for coord in input {
                if self.grid.contains(coord) {
                    segment.push(PathPoint::endpoint(coord));
                } else {
                    self.sink.emit(
                        Diagnostic::warning(
                            DiagnosticCode::MISSING_LOADED_SITE,
                            format!("no site at {coord} in this device, skipped"),
                        )
                        .at(Location::Site(coord))
                        .with_note(format!("segment {}", self.segments.len()))
                        .with_help("check that the netlist was generated for this device"),
                    );
                }
            }
            self.segments.push(segment);
        }
        if self.segments.is_empty() {
            self.segments.push(Segment::new());
        }

        log::debug!(
            "loaded {} segments, {} points",
            self.segments.len(),
            self.point_count()
        );
        PathDelta::Reset {
            segments: self.segments.len(),
        }
    }

    /// The coordinates of every segment, for the netlist generator.
    pub fn snapshot(&self) -> Vec<Vec<SiteCoord>> {
        self.segments
            .iter()
            .map(|segment| segment.coords().collect())
            .collect()
    }

    /// Generates the netlist with the default module and entry names.
    pub fn generate(&self) -> GeneratedNetlist {
        generate(&self.snapshot(), &self.netlist_options())
    }

    /// Generates the netlist with a custom module and entry signal name.
    pub fn generate_as(&self, module_name: &str, entry_signal: &str) -> GeneratedNetlist {
        let options = NetlistOptions {
            module_name: module_name.to_string(),
            entry_signal: entry_signal.to_string(),
            ..self.netlist_options()
        };
        generate(&self.snapshot(), &options)
    }

    /// Parses netlist text and bulk-loads the recovered segments.
    ///
    /// Non-blank text that yields no segment is reported as an error; the
    /// sketch is still replaced by one empty segment.
    pub fn import(&mut self, text: &str) -> PathDelta {
        let segments = parse_with_diagnostics(text, &self.sink);
        if segments.is_empty() && !text.trim().is_empty() {
            self.sink.emit(
                Diagnostic::error(
                    DiagnosticCode::NO_SEGMENTS_FOUND,
                    "no segment markers found in netlist",
                )
                .with_help("expected lines like `///// SEGMENT 0 BEGINNING /////`"),
            );
        }
        self.load(segments)
    }

    fn netlist_options(&self) -> NetlistOptions {
        NetlistOptions {
            wires: self.parallel_wires,
            ..NetlistOptions::default()
        }
    }
}

/// Evenly spaced points strictly between `from` and `to`, nearest `from` first.
///
/// Fractions are `i / (count + 1)` for `i` in `1..=count`; each coordinate is
/// rounded half-to-even and clamped to the grid's bounding box.
fn interpolate(grid: &SiteGrid, from: SiteCoord, to: SiteCoord, count: u8) -> Vec<SiteCoord> {
    let lerp = |a: u32, b: u32, t: f64| {
        let a = f64::from(a);
        (a + t * (f64::from(b) - a)).round_ties_even() as i64
    };
    (1..=count)
        .map(|i| {
            let t = f64::from(i) / f64::from(count + 1);
            grid.clamp(lerp(from.x, to.x, t), lerp(from.y, to.y, t))
        })
        .collect()
}
