//! Common trait for archive format backends.

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use crate::AsplodeConfig;
use crate::ExtractionReport;

/// An opened archive ready to be unpacked.
///
/// Backends validate their source when they are constructed, so a value of
/// this trait always refers to a readable instance of its format. The source
/// handle is owned by the backend and released when it is dropped.
pub trait ArchiveFormat {
    /// Writes the archive content into `scratch`.
    ///
    /// Container formats recreate each member under its relative path.
    /// Single-stream formats write one file named after the final segment of
    /// `base_name`.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error raised while decoding or writing.
    fn unpack(
        &mut self,
        scratch: &Path,
        base_name: &OsStr,
        config: &AsplodeConfig,
    ) -> io::Result<ExtractionReport>;

    /// Returns the archive format name.
    fn format_name(&self) -> &str;
}
