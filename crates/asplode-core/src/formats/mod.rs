//! Archive format detection and backends.

pub mod common;
pub mod compression;
pub mod detect;
pub mod gzip;
pub mod tar;
pub mod traits;
pub mod zip;

use std::path::Path;

use crate::Result;

// Re-export main types for convenience
pub use detect::ArchiveKind;
pub use detect::DetectedFormat;
pub use gzip::GzipStream;
pub use tar::TarArchive;
pub use traits::ArchiveFormat;
pub use zip::ZipArchive;

/// Opens `path` with the backend for `kind`.
///
/// # Errors
///
/// Returns `OpenFailure` if the file cannot be opened or is not a valid
/// instance of the format.
pub fn open_backend(path: &Path, kind: ArchiveKind) -> Result<Box<dyn ArchiveFormat>> {
    Ok(match kind {
        ArchiveKind::Zip => Box::new(ZipArchive::open(path)?),
        ArchiveKind::Gzip => Box::new(GzipStream::open(path)?),
        ArchiveKind::Tar => Box::new(TarArchive::open(path)?),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::TarTestBuilder;
    use crate::test_utils::ZipTestBuilder;
    use crate::test_utils::gzip_bytes;
    use crate::test_utils::write_fixture;
    use tempfile::TempDir;

    #[test]
    fn test_open_backend_dispatch() {
        let temp = TempDir::new().unwrap();
        let zip_path = write_fixture(
            temp.path(),
            "a.zip",
            &ZipTestBuilder::new().add_file("x", b"x").build(),
        );
        let gz_path = write_fixture(temp.path(), "b.gz", &gzip_bytes(b"payload"));
        let tar_path = write_fixture(
            temp.path(),
            "c.tar",
            &TarTestBuilder::new().add_file("x", b"x").build(),
        );

        assert_eq!(open_backend(&zip_path, ArchiveKind::Zip).unwrap().format_name(), "zip");
        assert_eq!(open_backend(&gz_path, ArchiveKind::Gzip).unwrap().format_name(), "gzip");
        assert_eq!(open_backend(&tar_path, ArchiveKind::Tar).unwrap().format_name(), "tar");
    }

    #[test]
    fn test_open_backend_wrong_format() {
        let temp = TempDir::new().unwrap();
        let gz_path = write_fixture(temp.path(), "b.zip", &gzip_bytes(b"payload"));

        assert!(open_backend(&gz_path, ArchiveKind::Zip).is_err());
    }
}
