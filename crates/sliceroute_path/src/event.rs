//! Discrete editing events forwarded by a front end.

use serde::{Deserialize, Serialize};
use sliceroute_common::SiteCoord;

use crate::delta::PathDelta;
use crate::error::PathError;
use crate::model::PathModel;

/// One operator action against the sketch.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SketchEvent {
    /// A site was clicked.
    Select(SiteCoord),
    /// Revert the most recent selection.
    Undo,
    /// Start a new segment.
    NewSegment,
    /// Discard every segment.
    Clear,
    /// Change the number of synthesized intermediate sites.
    SetIntermediateCount(u8),
    /// Change the fan-out width of the generated chain.
    SetParallelWires(u8),
}

impl PathModel<'_> {
    /// Dispatches an event to the matching operation.
    ///
    /// # Errors
    ///
    /// Only the two setting events can fail, on an out-of-range value; the
    /// model is left unchanged in that case.
    pub fn apply(&mut self, event: SketchEvent) -> Result<PathDelta, PathError> {
        let delta = match event {
            SketchEvent::Select(coord) => self.select(coord),
            SketchEvent::Undo => self.undo(),
            SketchEvent::NewSegment => self.new_segment(),
            SketchEvent::Clear => self.clear(),
            SketchEvent::SetIntermediateCount(count) => {
                self.set_intermediate_count(count)?;
                PathDelta::Unchanged
            }
            SketchEvent::SetParallelWires(wires) => {
                self.set_parallel_wires(wires)?;
                PathDelta::Unchanged
            }
        };
        Ok(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sliceroute_device::SiteGrid;

    #[test]
    fn events_drive_the_model() {
        let grid = SiteGrid::from_coords((0..3).map(|x| SiteCoord::new(x, 0))).unwrap();
        let mut model = PathModel::new(&grid);

        let events = [
            SketchEvent::SetIntermediateCount(1),
            SketchEvent::Select(SiteCoord::new(0, 0)),
            SketchEvent::Select(SiteCoord::new(2, 0)),
            SketchEvent::NewSegment,
            SketchEvent::Select(SiteCoord::new(1, 0)),
        ];
        for event in events {
            model.apply(event).unwrap();
        }

        assert_eq!(
            model.snapshot(),
            vec![
                vec![SiteCoord::new(0, 0), SiteCoord::new(1, 0), SiteCoord::new(2, 0)],
                vec![SiteCoord::new(1, 0)],
            ]
        );
    }

    #[test]
    fn bad_setting_is_an_error() {
        let grid = SiteGrid::from_coords([SiteCoord::new(0, 0)]).unwrap();
        let mut model = PathModel::new(&grid);
        assert!(model.apply(SketchEvent::SetParallelWires(5)).is_err());
        assert!(model.apply(SketchEvent::SetIntermediateCount(6)).is_err());
        assert_eq!(model.parallel_wires().get(), 1);
        assert_eq!(model.intermediate_count(), 0);
    }

    #[test]
    fn serde_roundtrip() {
        let event = SketchEvent::Select(SiteCoord::new(3, 4));
        let json = serde_json::to_string(&event).unwrap();
        let back: SketchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
