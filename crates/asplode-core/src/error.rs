//! Error types for recursive archive unpacking.

use std::io;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `AsplodeError`.
pub type Result<T> = std::result::Result<T, AsplodeError>;

/// Errors that can occur while unpacking a single archive.
///
/// Every variant carries the path the failing step was working on.
#[derive(Error, Debug)]
pub enum AsplodeError {
    /// The filename does not end in a recognized archive suffix.
    #[error("not a recognized archive: {}", path.display())]
    NotAnArchive {
        /// The path that was inspected.
        path: PathBuf,
    },

    /// The path does not refer to an existing regular file.
    #[error("no such file: {}", path.display())]
    SourceMissing {
        /// The missing path.
        path: PathBuf,
    },

    /// The file exists but cannot be opened as the format its name implies.
    #[error("error reading file for extraction {}: {reason}", path.display())]
    OpenFailure {
        /// The archive path.
        path: PathBuf,
        /// Why the archive was rejected.
        reason: String,
    },

    /// An I/O error occurred while unpacking members.
    #[error("error extracting {}: {source}", path.display())]
    ExtractionFailure {
        /// The archive path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Moving the extracted content into its final place failed.
    #[error("error arranging directories for {}: {source}", path.display())]
    NormalizeFailure {
        /// The path that could not be moved or listed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl AsplodeError {
    pub(crate) fn open_failure(path: &Path, reason: impl ToString) -> Self {
        Self::OpenFailure {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn extraction_failure(path: &Path, source: io::Error) -> Self {
        Self::ExtractionFailure {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn normalize_failure(path: &Path, source: io::Error) -> Self {
        Self::NormalizeFailure {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns `true` if this error only means there was nothing to unpack.
    ///
    /// Unrecognized suffixes and paths that are not regular files are
    /// expected while scanning extracted content for nested archives.
    ///
    /// # Examples
    ///
    /// ```
    /// use asplode_core::AsplodeError;
    /// use std::path::PathBuf;
    ///
    /// let err = AsplodeError::NotAnArchive {
    ///     path: PathBuf::from("notes.txt"),
    /// };
    /// assert!(err.is_nothing_to_do());
    ///
    /// let err = AsplodeError::OpenFailure {
    ///     path: PathBuf::from("broken.zip"),
    ///     reason: "invalid central directory".into(),
    /// };
    /// assert!(!err.is_nothing_to_do());
    /// ```
    #[must_use]
    pub const fn is_nothing_to_do(&self) -> bool {
        matches!(self, Self::NotAnArchive { .. } | Self::SourceMissing { .. })
    }

    /// Returns the path this error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotAnArchive { path }
            | Self::SourceMissing { path }
            | Self::OpenFailure { path, .. }
            | Self::ExtractionFailure { path, .. }
            | Self::NormalizeFailure { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_archive_display() {
        let err = AsplodeError::NotAnArchive {
            path: PathBuf::from("notes.txt"),
        };
        assert_eq!(err.to_string(), "not a recognized archive: notes.txt");
        assert!(err.is_nothing_to_do());
    }

    #[test]
    fn test_source_missing_is_nothing_to_do() {
        let err = AsplodeError::SourceMissing {
            path: PathBuf::from("gone.zip"),
        };
        assert!(err.is_nothing_to_do());
        assert_eq!(err.path(), Path::new("gone.zip"));
    }

    #[test]
    fn test_open_failure_display() {
        let err = AsplodeError::open_failure(Path::new("bad.zip"), "invalid Zip archive");
        let display = err.to_string();
        assert!(display.contains("error reading file for extraction"));
        assert!(display.contains("bad.zip"));
        assert!(display.contains("invalid Zip archive"));
        assert!(!err.is_nothing_to_do());
    }

    #[test]
    fn test_extraction_failure_source_chain() {
        use std::error::Error;

        let io_err = io::Error::new(io::ErrorKind::StorageFull, "disk full");
        let err = AsplodeError::extraction_failure(Path::new("big.tar"), io_err);
        assert!(err.to_string().contains("disk full"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_normalize_failure_path() {
        let io_err = io::Error::new(io::ErrorKind::AlreadyExists, "target exists");
        let err = AsplodeError::normalize_failure(Path::new("/tmp/out/foo"), io_err);
        assert_eq!(err.path(), Path::new("/tmp/out/foo"));
        assert!(err.to_string().contains("arranging directories"));
    }
}
