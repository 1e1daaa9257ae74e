//! Domain error types

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading or writing filter descriptor files.
///
/// The four variants keep the failure causes distinguishable: I/O trouble,
/// a bad metadata line, an unparseable coefficient line, and a tap count
/// that contradicts the declared order.
#[derive(Error, Debug)]
pub enum FilterFileError {
    /// The file could not be read or written at all.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A metadata line is malformed: unknown key, missing value, value of
    /// the wrong type, or a required key absent from the file.
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// A non-metadata, non-comment line is not a valid coefficient.
    #[error("line {line}: coefficient '{text}' is not a number")]
    Coefficient { line: usize, text: String },

    /// The number of coefficient lines contradicts the declared order.
    /// A filter of order N must carry exactly N + 1 coefficients.
    #[error("declared order {order} does not match {found} coefficient(s)")]
    CountMismatch { order: usize, found: usize },
}

impl FilterFileError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        FilterFileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for filter file operations
pub type FilterFileResult<T> = Result<T, FilterFileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_names_the_path() {
        let err = FilterFileError::io(
            Path::new("/tmp/missing.fir"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.fir"), "got: {msg}");
        assert!(msg.contains("no such file"), "got: {msg}");
    }

    #[test]
    fn count_mismatch_message_reports_both_sides() {
        let err = FilterFileError::CountMismatch { order: 4, found: 3 };
        let msg = err.to_string();
        assert!(msg.contains('4'), "got: {msg}");
        assert!(msg.contains('3'), "got: {msg}");
    }

    #[test]
    fn count_mismatch_survives_extreme_order() {
        // Display must not compute order + 1
        let err = FilterFileError::CountMismatch {
            order: usize::MAX,
            found: 0,
        };
        assert!(err.to_string().contains("does not match"));
    }
}
