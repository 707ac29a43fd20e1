//! File and directory writers shared between archive backends.

use std::fs::File;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::io::{self};
use std::path::Path;

use crate::ExtractionReport;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;

/// Streams `reader` into a new file at `target`.
///
/// Parent directories are created as needed. When `mode` is given the Unix
/// permission bits are applied after the data is flushed; other platforms
/// ignore it.
///
/// # Errors
///
/// Returns an error if directory creation, file creation, the copy or
/// setting permissions fails.
pub fn write_file<R: Read + ?Sized>(
    reader: &mut R,
    target: &Path,
    mode: Option<u32>,
    report: &mut ExtractionReport,
    copy_buffer: &mut CopyBuffer,
) -> io::Result<()> {
    if let Some(parent) = target.parent() {
        create_dir_all(parent)?;
    }

    let output_file = File::create(target)?;
    let mut buffered_writer = BufWriter::with_capacity(64 * 1024, output_file);
    let bytes_written = copy_with_buffer(reader, &mut buffered_writer, copy_buffer)?;
    buffered_writer.flush()?;

    #[cfg(unix)]
    if let Some(mode) = mode {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(target, std::fs::Permissions::from_mode(mode & 0o7777))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    report.files_extracted += 1;
    report.bytes_written = report.bytes_written.saturating_add(bytes_written);

    Ok(())
}

/// Creates a directory member. Idempotent.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub fn create_directory(target: &Path, report: &mut ExtractionReport) -> io::Result<()> {
    create_dir_all(target)?;
    report.directories_created += 1;
    Ok(())
}

/// Records a member that was not written because its path escapes the
/// scratch directory.
pub fn skip_member(name: &str, report: &mut ExtractionReport) {
    tracing::warn!(member = name, "skipping member outside extraction directory");
    report.files_skipped += 1;
    report.add_warning(format!("skipped member outside extraction directory: {name}"));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_parents() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a/b/c.txt");
        let mut report = ExtractionReport::new();
        let mut buffer = CopyBuffer::new();
        let mut data: &[u8] = b"nested content";

        write_file(&mut data, &target, None, &mut report, &mut buffer).unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"nested content");
        assert_eq!(report.files_extracted, 1);
        assert_eq!(report.bytes_written, 14);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_applies_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let target = temp.path().join("run.sh");
        let mut report = ExtractionReport::new();
        let mut buffer = CopyBuffer::new();
        let mut data: &[u8] = b"#!/bin/sh\n";

        write_file(&mut data, &target, Some(0o100_750), &mut report, &mut buffer).unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o750);
    }

    #[test]
    fn test_create_directory_idempotent() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("dir");
        let mut report = ExtractionReport::new();

        create_directory(&target, &mut report).unwrap();
        create_directory(&target, &mut report).unwrap();

        assert!(target.is_dir());
        assert_eq!(report.directories_created, 2);
    }

    #[test]
    fn test_skip_member() {
        let mut report = ExtractionReport::new();
        skip_member("../evil", &mut report);
        assert_eq!(report.files_skipped, 1);
        assert!(report.warnings[0].contains("../evil"));
    }
}
