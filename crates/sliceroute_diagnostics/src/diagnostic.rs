//! Structured diagnostic messages with severity, codes, and locations.

use crate::code::DiagnosticCode;
use crate::location::Location;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A structured diagnostic message.
///
/// Each diagnostic includes:
/// - A severity level and unique code
/// - A primary message and, when known, the site or line it concerns
/// - Optional notes and help text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The unique code identifying the type of diagnostic.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// The site or netlist line this diagnostic refers to.
    pub location: Option<Location>,
    /// Explanatory footnotes (e.g., "note: ...").
    pub notes: Vec<String>,
    /// Actionable suggestions (e.g., "help: ...").
    pub help: Vec<String>,
}

impl Diagnostic {
    fn with_severity(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            location: None,
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Creates a new error diagnostic with the given code and message.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, code, message)
    }

    /// Creates a new warning diagnostic with the given code and message.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, code, message)
    }

    /// Creates a new informational diagnostic with the given code and message.
    pub fn note(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Note, code, message)
    }

    /// Attaches the site or line this diagnostic refers to.
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help message to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Category;
    use sliceroute_common::SiteCoord;

    #[test]
    fn create_error() {
        let code = DiagnosticCode::new(Category::Error, 1);
        let diag = Diagnostic::error(code, "device dump is empty");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "device dump is empty");
        assert_eq!(format!("{}", diag.code), "E001");
        assert!(diag.location.is_none());
    }

    #[test]
    fn create_warning_at_site() {
        let diag = Diagnostic::warning(DiagnosticCode::MISSING_LOADED_SITE, "no such site")
            .at(Location::Site(SiteCoord::new(4, 4)));
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.location, Some(Location::Site(SiteCoord::new(4, 4))));
    }

    #[test]
    fn builder_methods() {
        let diag = Diagnostic::note(DiagnosticCode::SEGMENT_OUT_OF_SEQUENCE, "marker 3 after 1")
            .at(Location::Line(10))
            .with_note("segments are loaded in file order")
            .with_help("renumber the SEGMENT markers");
        assert_eq!(diag.severity, Severity::Note);
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.help.len(), 1);
    }
}
