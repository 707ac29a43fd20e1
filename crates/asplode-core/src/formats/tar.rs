//! Tar archive backend with automatic compression sensing.

use std::ffi::OsStr;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Cursor;
use std::io::Read;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;

use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;

use crate::AsplodeConfig;
use crate::AsplodeError;
use crate::ExtractionReport;
use crate::Result;

use super::common::skip_member;
use super::compression::CompressionCodec;
use super::traits::ArchiveFormat;

/// Size of a tar header block.
const BLOCK_SIZE: usize = 512;

/// Byte range of the checksum field inside a header block.
const CHECKSUM_FIELD: std::ops::Range<usize> = 148..156;

/// Tar archive opened for member iteration.
///
/// The compression codec is sniffed from the file's magic bytes, and the
/// first header block is decoded and checksummed up front so that a
/// corrupt or mislabelled file is rejected before anything is written.
pub struct TarArchive {
    path: PathBuf,
    codec: Option<CompressionCodec>,
    reader: Box<dyn Read>,
}

impl TarArchive {
    /// Opens `path`, detects its compression and validates the first block.
    ///
    /// # Errors
    ///
    /// Returns `OpenFailure` if the file cannot be read, fails to
    /// decompress, is shorter than one block, or its first header block has
    /// a bad checksum.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| AsplodeError::open_failure(path, e))?;
        let mut buffered = BufReader::new(file);
        let codec = CompressionCodec::sniff(
            buffered
                .fill_buf()
                .map_err(|e| AsplodeError::open_failure(path, e))?,
        );

        let mut decoded: Box<dyn Read> = match codec {
            Some(CompressionCodec::Gzip) => Box::new(MultiGzDecoder::new(buffered)),
            Some(CompressionCodec::Bzip2) => Box::new(MultiBzDecoder::new(buffered)),
            None => Box::new(buffered),
        };

        let mut first_block = [0u8; BLOCK_SIZE];
        decoded.read_exact(&mut first_block).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                AsplodeError::open_failure(path, "truncated tar stream")
            } else {
                AsplodeError::open_failure(path, e)
            }
        })?;

        if !is_zero_block(&first_block) && !has_valid_checksum(&first_block) {
            return Err(AsplodeError::open_failure(path, "invalid tar header checksum"));
        }

        tracing::debug!(
            archive = %path.display(),
            codec = codec.map_or("none", CompressionCodec::name),
            "opened tar stream"
        );

        Ok(Self {
            path: path.to_path_buf(),
            codec,
            reader: Box::new(Cursor::new(first_block).chain(decoded)),
        })
    }

    /// Returns the detected compression codec, `None` for plain tar.
    #[must_use]
    pub const fn codec(&self) -> Option<CompressionCodec> {
        self.codec
    }
}

impl ArchiveFormat for TarArchive {
    fn unpack(
        &mut self,
        scratch: &Path,
        _base_name: &OsStr,
        config: &AsplodeConfig,
    ) -> io::Result<ExtractionReport> {
        let mut report = ExtractionReport::new();
        let mut archive = tar::Archive::new(&mut self.reader);
        archive.set_preserve_permissions(config.preserve_permissions);
        archive.set_preserve_mtime(true);

        for entry in archive.entries()? {
            let mut entry = entry?;
            let entry_type = entry.header().entry_type();
            let size = entry.size();

            if !entry.unpack_in(scratch)? {
                let name = entry.path()?.display().to_string();
                skip_member(&name, &mut report);
                continue;
            }

            if entry_type.is_dir() {
                report.directories_created += 1;
            } else if entry_type.is_file() {
                report.files_extracted += 1;
                report.bytes_written = report.bytes_written.saturating_add(size);
            }
        }

        tracing::debug!(
            archive = %self.path.display(),
            files = report.files_extracted,
            directories = report.directories_created,
            "unpacked tar members"
        );

        Ok(report)
    }

    fn format_name(&self) -> &str {
        "tar"
    }
}

fn is_zero_block(block: &[u8; BLOCK_SIZE]) -> bool {
    block.iter().all(|&b| b == 0)
}

/// Verifies the header checksum: the unsigned byte sum of the block with
/// the checksum field read as spaces.
fn has_valid_checksum(block: &[u8; BLOCK_SIZE]) -> bool {
    let header = tar::Header::from_byte_slice(block);
    let Ok(stored) = header.cksum() else {
        return false;
    };

    let computed: u32 = block
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            if CHECKSUM_FIELD.contains(&i) {
                u32::from(b' ')
            } else {
                u32::from(b)
            }
        })
        .sum();

    stored == computed
}
