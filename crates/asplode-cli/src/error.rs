//! Error conversion utilities for CLI.
//!
//! Converts asplode-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use asplode_core::AsplodeError;
use asplode_core::formats::detect::ARCHIVE_EXTENSIONS;

/// Converts `AsplodeError` to user-friendly anyhow error with context
pub fn convert_asplode_error(err: AsplodeError) -> anyhow::Error {
    match err {
        AsplodeError::SourceMissing { path } => {
            anyhow!(
                "Archive not found: {}\n\
                 HINT: The path must name an existing regular file.",
                path.display()
            )
        }
        AsplodeError::NotAnArchive { path } => {
            anyhow!(
                "Not a recognized archive: {}\n\
                 HINT: Supported suffixes (case-sensitive): {}",
                path.display(),
                ARCHIVE_EXTENSIONS.join(", ")
            )
        }
        AsplodeError::OpenFailure { path, reason } => {
            anyhow!(
                "Error reading file for extraction '{}': {}\n\
                 HINT: The archive may be corrupted or its suffix may not match its content.",
                path.display(),
                reason
            )
        }
        AsplodeError::NormalizeFailure { ref source, .. }
            if source.kind() == std::io::ErrorKind::AlreadyExists =>
        {
            anyhow!(
                "{err}\n\
                 HINT: Remove or rename the existing entry and run again."
            )
        }
        _ => anyhow::Error::from(err),
    }
}
