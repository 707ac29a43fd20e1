//! ZIP archive backend.

use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;

use crate::AsplodeConfig;
use crate::AsplodeError;
use crate::ExtractionReport;
use crate::Result;
use crate::copy::CopyBuffer;

use super::common::create_directory;
use super::common::skip_member;
use super::common::write_file;
use super::traits::ArchiveFormat;

/// ZIP archive opened for member iteration.
pub struct ZipArchive {
    path: PathBuf,
    archive: zip::ZipArchive<BufReader<File>>,
}

impl ZipArchive {
    /// Opens `path` and reads its central directory.
    ///
    /// # Errors
    ///
    /// Returns `OpenFailure` if the file cannot be opened or is not a valid
    /// ZIP archive.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| AsplodeError::open_failure(path, e))?;
        let archive = zip::ZipArchive::new(BufReader::new(file))
            .map_err(|e| AsplodeError::open_failure(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    /// Returns the number of members in the archive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Returns `true` if the archive has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}

impl ArchiveFormat for ZipArchive {
    fn unpack(
        &mut self,
        scratch: &Path,
        _base_name: &OsStr,
        config: &AsplodeConfig,
    ) -> io::Result<ExtractionReport> {
        let mut report = ExtractionReport::new();
        let mut copy_buffer = CopyBuffer::new();

        for index in 0..self.archive.len() {
            let mut member = self.archive.by_index(index)?;

            let Some(relative) = member.enclosed_name() else {
                skip_member(member.name(), &mut report);
                continue;
            };
            let target = scratch.join(relative);

            if member.is_dir() {
                create_directory(&target, &mut report)?;
                continue;
            }

            let mode = if config.preserve_permissions {
                member.unix_mode()
            } else {
                None
            };
            write_file(&mut member, &target, mode, &mut report, &mut copy_buffer)?;
        }

        tracing::debug!(
            archive = %self.path.display(),
            files = report.files_extracted,
            directories = report.directories_created,
            "unpacked zip members"
        );

        Ok(report)
    }

    fn format_name(&self) -> &str {
        "zip"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::ZipTestBuilder;
    use crate::test_utils::write_fixture;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unpack_preserves_relative_paths() {
        let temp = TempDir::new().unwrap();
        let data = ZipTestBuilder::new()
            .add_directory("docs/")
            .add_file("docs/readme.txt", b"read me")
            .add_file("top.txt", b"top level")
            .build();
        let archive_path = write_fixture(temp.path(), "bundle.zip", &data);
        let scratch = temp.path().join("scratch");
        fs::create_dir(&scratch).unwrap();

        let mut archive = ZipArchive::open(&archive_path).unwrap();
        assert_eq!(archive.len(), 3);
        let report = archive
            .unpack(&scratch, OsStr::new("bundle"), &AsplodeConfig::default())
            .unwrap();

        assert_eq!(fs::read(scratch.join("docs/readme.txt")).unwrap(), b"read me");
        assert_eq!(fs::read(scratch.join("top.txt")).unwrap(), b"top level");
        assert_eq!(report.files_extracted, 2);
        assert_eq!(report.directories_created, 1);
        assert_eq!(report.bytes_written, 16);
    }

    #[test]
    fn test_unpack_creates_missing_parents() {
        let temp = TempDir::new().unwrap();
        let data = ZipTestBuilder::new()
            .add_file("a/b/c/deep.txt", b"deep")
            .build();
        let archive_path = write_fixture(temp.path(), "deep.zip", &data);
        let scratch = temp.path().join("scratch");
        fs::create_dir(&scratch).unwrap();

        let mut archive = ZipArchive::open(&archive_path).unwrap();
        archive
            .unpack(&scratch, OsStr::new("deep"), &AsplodeConfig::default())
            .unwrap();

        assert!(scratch.join("a/b/c/deep.txt").is_file());
    }

    #[test]
    fn test_unpack_skips_escaping_member() {
        let temp = TempDir::new().unwrap();
        let data = ZipTestBuilder::new()
            .add_file("../escape.txt", b"nope")
            .add_file("ok.txt", b"fine")
            .build();
        let archive_path = write_fixture(temp.path(), "evil.zip", &data);
        let scratch = temp.path().join("scratch");
        fs::create_dir(&scratch).unwrap();

        let mut archive = ZipArchive::open(&archive_path).unwrap();
        let report = archive
            .unpack(&scratch, OsStr::new("evil"), &AsplodeConfig::default())
            .unwrap();

        assert_eq!(report.files_skipped, 1);
        assert!(!temp.path().join("escape.txt").exists());
        assert!(scratch.join("ok.txt").is_file());
    }

    #[test]
    fn test_open_rejects_garbage() {
        let temp = TempDir::new().unwrap();
        let archive_path = write_fixture(temp.path(), "fake.zip", b"definitely not a zip");

        let result = ZipArchive::open(&archive_path);
        assert!(matches!(result, Err(AsplodeError::OpenFailure { .. })));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = ZipArchive::open(&temp.path().join("missing.zip"));
        assert!(matches!(result, Err(AsplodeError::OpenFailure { .. })));
    }

    #[test]
    fn test_format_name() {
        let temp = TempDir::new().unwrap();
        let data = ZipTestBuilder::new().build();
        let archive_path = write_fixture(temp.path(), "empty.zip", &data);
        let archive = ZipArchive::open(&archive_path).unwrap();
        assert_eq!(archive.format_name(), "zip");
        assert!(archive.is_empty());
    }
}
