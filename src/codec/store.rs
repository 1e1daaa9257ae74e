//! Filesystem side of descriptor persistence: read_filter / write_filter.
//!
//! Pure translation lives in `encode` / `decode`. This module only handles
//! I/O: reading whole files, and replacing them atomically on write so a
//! failed write can never leave a destination holding a mix of old and
//! new content.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::{FilterDescriptor, FilterFileError, FilterFileResult, FilterKind};

use super::{decode, encode};

/// Read and decode the descriptor file at `path`.
///
/// An unreadable file (missing, permissions) maps to the I/O error variant
/// with the path attached; the content then goes through [`decode`].
pub fn read_filter(path: &Path) -> FilterFileResult<FilterDescriptor> {
    let text = fs::read_to_string(path).map_err(|e| FilterFileError::io(path, e))?;
    let descriptor = decode(&text)?;
    log::debug!(
        "read {} tap(s) from {}",
        descriptor.tap_count(),
        path.display()
    );
    Ok(descriptor)
}

/// Encode `descriptor` and replace the file at `path` in one step.
///
/// The name and a preserved type label each occupy the remainder of one
/// metadata line, so text the line grammar cannot reproduce (line breaks,
/// leading or trailing whitespace, empty text) is rejected with a
/// metadata error before anything touches the filesystem. The encoded
/// text is then staged into a temporary file and renamed over `path` once
/// fully written: either the complete new content becomes observable or
/// the destination keeps its prior content. A pre-existing file is
/// overwritten in full.
pub fn write_filter(path: &Path, descriptor: &FilterDescriptor) -> FilterFileResult<()> {
    check_line_value("filter name", &descriptor.name)?;
    if let FilterKind::Other(label) = &descriptor.kind {
        check_line_value("filter type label", label)?;
    }

    let text = encode(descriptor);

    // Stage next to the destination so persist() is a rename on the same
    // filesystem.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| FilterFileError::io(path, e))?;
    staged
        .write_all(text.as_bytes())
        .map_err(|e| FilterFileError::io(path, e))?;
    staged
        .persist(path)
        .map_err(|e| FilterFileError::io(path, e.error))?;

    log::debug!(
        "wrote {} tap(s) to {}",
        descriptor.tap_count(),
        path.display()
    );
    Ok(())
}

/// Free text is stored as the remainder of a single metadata line. A line
/// break would be read back as a separate (and possibly metadata) line;
/// the reader trims values and treats an empty remainder as a missing
/// value. Only text the grammar can give back unchanged is accepted.
fn check_line_value(field: &str, value: &str) -> FilterFileResult<()> {
    if value.contains('\n') || value.contains('\r') {
        return Err(FilterFileError::Metadata(format!(
            "{field} must not contain line breaks"
        )));
    }
    if value.is_empty() || value.trim() != value {
        return Err(FilterFileError::Metadata(format!(
            "{field} must be non-empty, without leading or trailing whitespace"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tempfile::tempdir;

    fn sample() -> FilterDescriptor {
        FilterDescriptor::new(
            FilterKind::LowPass,
            "store test",
            8000.0,
            vec![0.1, 0.8, 0.1],
        )
    }

    // --- read ---

    #[test]
    fn read_missing_file_is_io_error_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.fir");
        match read_filter(&path) {
            Err(FilterFileError::Io { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    // --- write ---

    #[test]
    fn write_then_read_returns_equal_descriptor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.fir");
        write_filter(&path, &sample()).unwrap();
        assert_eq!(read_filter(&path).unwrap(), sample());
    }

    #[test]
    fn write_overwrites_previous_content_completely() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.fir");
        write_filter(&path, &sample()).unwrap();

        let replacement =
            FilterDescriptor::new(FilterKind::HighPass, "replacement", 16000.0, vec![0.5, -0.5]);
        write_filter(&path, &replacement).unwrap();
        assert_eq!(read_filter(&path).unwrap(), replacement);
    }

    // --- unstorable free text ---

    #[test]
    fn write_rejects_name_spanning_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sneaky.fir");
        let mut d = sample();
        // The embedded line is itself valid metadata; stored as-is it
        // would read back as a descriptor named "hijacked"
        d.name = "innocent\nNAME hijacked".to_string();
        match write_filter(&path, &d) {
            Err(FilterFileError::Metadata(msg)) => {
                assert!(msg.contains("line break"), "got: {msg}")
            }
            other => panic!("expected metadata error, got {other:?}"),
        }
        assert!(!path.exists(), "rejected descriptor must not reach disk");
    }

    #[test]
    fn write_rejects_names_that_do_not_survive_trimming() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("padded.fir");
        for bad in ["", "   ", " padded ", "trailing "] {
            let mut d = sample();
            d.name = bad.to_string();
            assert!(
                matches!(write_filter(&path, &d), Err(FilterFileError::Metadata(_))),
                "name {bad:?} should be rejected"
            );
        }
        assert!(!path.exists());
    }

    #[test]
    fn write_rejects_other_type_label_spanning_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sneaky_type.fir");
        let mut d = sample();
        d.kind = FilterKind::Other("comb\nNAME hijacked".to_string());
        assert!(matches!(
            write_filter(&path, &d),
            Err(FilterFileError::Metadata(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn write_into_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_subdir").join("sample.fir");
        assert!(matches!(
            write_filter(&path, &sample()),
            Err(FilterFileError::Io { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn failed_write_keeps_destination_and_leaves_no_staging_litter() {
        let dir = tempdir().unwrap();
        // Occupy the destination with a directory: staging succeeds but the
        // final rename cannot, which exercises the late failure path.
        let path = dir.path().join("occupied");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("marker"), b"prior content").unwrap();

        assert!(matches!(
            write_filter(&path, &sample()),
            Err(FilterFileError::Io { .. })
        ));

        assert!(path.is_dir(), "destination was clobbered");
        assert_eq!(fs::read(path.join("marker")).unwrap(), b"prior content");
        // The staged temp file must be cleaned up on failure
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1, "staging left debris in the directory");
    }

    #[test]
    fn write_leaves_exactly_one_file_behind() {
        let dir = tempdir().unwrap();
        write_filter(&dir.path().join("only.fir"), &sample()).unwrap();
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
