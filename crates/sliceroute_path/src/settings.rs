//! Session-wide sketch settings.

use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// How many sites to synthesize between two consecutive selections, `0..=5`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct IntermediateCount(u8);

impl IntermediateCount {
    /// The largest supported count.
    pub const MAX: u8 = 5;

    /// Creates a count, rejecting values above [`MAX`](Self::MAX).
    pub fn new(count: u8) -> Result<Self, PathError> {
        if count <= Self::MAX {
            Ok(Self(count))
        } else {
            Err(PathError::IntermediateCountOutOfRange(count))
        }
    }

    /// Returns the raw count.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for IntermediateCount {
    type Error = PathError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<IntermediateCount> for u8 {
    fn from(count: IntermediateCount) -> Self {
        count.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range() {
        assert_eq!(IntermediateCount::default().get(), 0);
        assert_eq!(IntermediateCount::new(5).unwrap().get(), 5);
        assert_eq!(
            IntermediateCount::new(6),
            Err(PathError::IntermediateCountOutOfRange(6))
        );
    }

    #[test]
    fn serde_validates() {
        let count: IntermediateCount = serde_json::from_str("2").unwrap();
        assert_eq!(count.get(), 2);
        assert!(serde_json::from_str::<IntermediateCount>("9").is_err());
    }
}
