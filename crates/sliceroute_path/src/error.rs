//! Error types for sketch settings.

use sliceroute_common::LaneError;

/// Errors from changing a sketch setting to an unsupported value.
///
/// Editing operations themselves never fail; they skip bad input and report
/// it through the model's diagnostic sink.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The intermediate count is not in `0..=5`.
    #[error("intermediate count must be between 0 and 5, got {0}")]
    IntermediateCountOutOfRange(u8),

    /// The parallel wire count is not in `1..=4`.
    #[error(transparent)]
    Lanes(#[from] LaneError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_intermediate_range() {
        let err = PathError::IntermediateCountOutOfRange(6);
        assert_eq!(
            format!("{err}"),
            "intermediate count must be between 0 and 5, got 6"
        );
    }

    #[test]
    fn lane_error_is_transparent() {
        let err = PathError::from(LaneError::OutOfRange(0));
        assert_eq!(
            format!("{err}"),
            "parallel wire count must be between 1 and 4, got 0"
        );
    }
}
