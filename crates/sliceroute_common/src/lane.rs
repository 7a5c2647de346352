//! Parallel lanes for redundant cell chains.
//!
//! A generated chain can be fanned out into up to four physically parallel
//! copies. Each copy is a [`Lane`] tagged `A` through `D`; the lane letter
//! selects the LUT position inside the slice (`A5LUT` .. `D5LUT`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four LUT positions a parallel chain can occupy within a slice.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Lane {
    /// First lane, `A5LUT`.
    A,
    /// Second lane, `B5LUT`.
    B,
    /// Third lane, `C5LUT`.
    C,
    /// Fourth lane, `D5LUT`.
    D,
}

impl Lane {
    /// All lanes in allocation order.
    pub const ALL: [Lane; 4] = [Lane::A, Lane::B, Lane::C, Lane::D];

    /// Returns the upper-case lane letter.
    pub fn letter(self) -> char {
        match self {
            Lane::A => 'A',
            Lane::B => 'B',
            Lane::C => 'C',
            Lane::D => 'D',
        }
    }

    /// Returns the lower-case lane letter used in signal and instance names.
    pub fn lower(self) -> char {
        self.letter().to_ascii_lowercase()
    }

    /// Returns the BEL placement tag for this lane.
    pub fn bel(self) -> &'static str {
        match self {
            Lane::A => "A5LUT",
            Lane::B => "B5LUT",
            Lane::C => "C5LUT",
            Lane::D => "D5LUT",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Errors for an out-of-range parallel wire count.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LaneError {
    /// The requested fan-out width is not in `1..=4`.
    #[error("parallel wire count must be between 1 and 4, got {0}")]
    OutOfRange(u8),
}

/// The fan-out width of a generated chain, always in `1..=4`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ParallelWires(u8);

impl ParallelWires {
    /// A single unlabeled chain.
    pub const SINGLE: ParallelWires = ParallelWires(1);

    /// The widest supported fan-out.
    pub const MAX: u8 = 4;

    /// Creates a wire count, rejecting values outside `1..=4`.
    pub fn new(count: u8) -> Result<Self, LaneError> {
        if (1..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(LaneError::OutOfRange(count))
        }
    }

    /// Returns the raw count.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns `true` when only one unlabeled chain is generated.
    pub fn is_single(self) -> bool {
        self.0 == 1
    }

    /// The lanes in use, `A` first.
    pub fn lanes(self) -> &'static [Lane] {
        &Lane::ALL[..self.0 as usize]
    }
}

impl Default for ParallelWires {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl TryFrom<u8> for ParallelWires {
    type Error = LaneError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<ParallelWires> for u8 {
    fn from(wires: ParallelWires) -> Self {
        wires.0
    }
}

impl fmt::Display for ParallelWires {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "1 wire")
        } else {
            write!(f, "{} parallel wires", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_tags() {
        assert_eq!(Lane::A.letter(), 'A');
        assert_eq!(Lane::C.lower(), 'c');
        assert_eq!(Lane::D.bel(), "D5LUT");
    }

    #[test]
    fn wire_count_range() {
        assert!(ParallelWires::new(0).is_err());
        assert!(ParallelWires::new(1).is_ok());
        assert!(ParallelWires::new(4).is_ok());
        assert_eq!(ParallelWires::new(5), Err(LaneError::OutOfRange(5)));
    }

    #[test]
    fn lanes_are_truncated() {
        assert_eq!(ParallelWires::SINGLE.lanes(), &[Lane::A]);
        let three = ParallelWires::new(3).unwrap();
        assert_eq!(three.lanes(), &[Lane::A, Lane::B, Lane::C]);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", ParallelWires::SINGLE), "1 wire");
        assert_eq!(format!("{}", ParallelWires::new(2).unwrap()), "2 parallel wires");
        assert_eq!(
            format!("{}", LaneError::OutOfRange(9)),
            "parallel wire count must be between 1 and 4, got 9"
        );
    }

    #[test]
    fn serde_validates() {
        let wires: ParallelWires = serde_json::from_str("3").unwrap();
        assert_eq!(wires.get(), 3);
        assert!(serde_json::from_str::<ParallelWires>("0").is_err());
        assert_eq!(serde_json::to_string(&wires).unwrap(), "3");
    }
}
