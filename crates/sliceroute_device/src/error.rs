//! Error types for site grid construction.

/// Errors that can occur while building a [`SiteGrid`](crate::SiteGrid).
///
/// All of these are fatal for a session: nothing can be sketched without a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The device description could not be read.
    #[error("failed to read device description: {0}")]
    Io(#[from] std::io::Error),

    /// The device description contained no slice sites.
    #[error("no slice sites found in device description")]
    NoSites,

    /// Two sites share a coordinate or a name.
    #[error("duplicate site '{0}'")]
    DuplicateSite(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_no_sites() {
        assert_eq!(
            format!("{}", GridError::NoSites),
            "no slice sites found in device description"
        );
    }

    #[test]
    fn display_duplicate() {
        let err = GridError::DuplicateSite("SLICE_X1Y1".to_string());
        assert_eq!(format!("{err}"), "duplicate site 'SLICE_X1Y1'");
    }

    #[test]
    fn display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let display = format!("{}", GridError::from(io_err));
        assert!(display.starts_with("failed to read device description:"));
    }
}
