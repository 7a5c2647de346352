//! Diagnostic codes with category prefixes for structured identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Input that leaves nothing to work with, prefixed with `E`.
    Error,
    /// Skipped input during sketch editing, prefixed with `W`.
    Warning,
    /// Scripted sketch replay findings, prefixed with `P`.
    Path,
    /// Netlist import findings, prefixed with `N`.
    Netlist,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
            Category::Path => 'P',
            Category::Netlist => 'N',
        }
    }
}

/// A structured diagnostic code combining a category prefix and a numeric identifier.
///
/// Displayed as the category prefix followed by a zero-padded 3-digit number,
/// e.g. `W101`, `N201`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }

    /// Netlist text held no segment marker, so nothing was imported.
    pub const NO_SEGMENTS_FOUND: Self = Self::new(Category::Error, 1);

    /// The sketch has no sites, so the netlist would hold no cells.
    pub const EMPTY_SKETCH: Self = Self::new(Category::Error, 2);

    /// An interpolated point fell on a coordinate with no site.
    pub const MISSING_INTERPOLATED_SITE: Self = Self::new(Category::Warning, 101);

    /// A bulk-loaded coordinate has no site in the grid.
    pub const MISSING_LOADED_SITE: Self = Self::new(Category::Warning, 102);

    /// A scripted selection named a coordinate with no site.
    pub const SELECTION_OFF_GRID: Self = Self::new(Category::Path, 101);

    /// A placement line appeared before any segment marker.
    pub const ORPHAN_PLACEMENT: Self = Self::new(Category::Netlist, 201);

    /// A segment marker's index does not follow the previous one.
    pub const SEGMENT_OUT_OF_SEQUENCE: Self = Self::new(Category::Netlist, 202);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}
