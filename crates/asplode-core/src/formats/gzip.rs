//! Single-stream gzip backend.

use std::ffi::OsStr;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;

use flate2::read::MultiGzDecoder;

use crate::AsplodeConfig;
use crate::AsplodeError;
use crate::ExtractionReport;
use crate::Result;
use crate::copy::CopyBuffer;

use super::common::write_file;
use super::compression::is_gzip_magic;
use super::traits::ArchiveFormat;

/// Gzip stream opened for a single sequential read.
///
/// The stream has no member list; its whole decompressed payload becomes
/// one file named after the archive's base name.
pub struct GzipStream {
    path: PathBuf,
    decoder: MultiGzDecoder<BufReader<File>>,
}

impl GzipStream {
    /// Opens `path` and checks the gzip magic bytes.
    ///
    /// # Errors
    ///
    /// Returns `OpenFailure` if the file cannot be opened or does not start
    /// with a gzip header.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| AsplodeError::open_failure(path, e))?;
        let mut buffered = BufReader::new(file);
        let header = buffered
            .fill_buf()
            .map_err(|e| AsplodeError::open_failure(path, e))?;
        if !is_gzip_magic(header) {
            return Err(AsplodeError::open_failure(path, "not a gzip stream"));
        }

        Ok(Self {
            path: path.to_path_buf(),
            decoder: MultiGzDecoder::new(buffered),
        })
    }
}

impl ArchiveFormat for GzipStream {
    fn unpack(
        &mut self,
        scratch: &Path,
        base_name: &OsStr,
        _config: &AsplodeConfig,
    ) -> io::Result<ExtractionReport> {
        let file_name = Path::new(base_name).file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("no file name in base name {base_name:?}"),
            )
        })?;
        let target = scratch.join(file_name);

        let mut report = ExtractionReport::new();
        let mut copy_buffer = CopyBuffer::new();
        write_file(&mut self.decoder, &target, None, &mut report, &mut copy_buffer)?;

        tracing::debug!(
            archive = %self.path.display(),
            bytes = report.bytes_written,
            "decompressed gzip stream"
        );

        Ok(report)
    }

    fn format_name(&self) -> &str {
        "gzip"
    }
}
