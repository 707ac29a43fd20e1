//! A single extraction step: detect, unpack into scratch, normalize.

use std::path::Path;

use crate::AsplodeConfig;
use crate::AsplodeError;
use crate::Result;
use crate::extraction::ExtractionOutcome;
use crate::extraction::layout::normalize;
use crate::extraction::scratch::ScratchDir;
use crate::formats::detect::detect_format;
use crate::formats::open_backend;

/// Unpacks `archive` into `dest_dir` without descending into nested
/// archives.
///
/// The archive is opened and validated before any scratch directory is
/// created. Its content lands in a fresh scratch directory inside
/// `dest_dir`, which is then merged or collected under the archive's base
/// name.
///
/// # Errors
///
/// - `SourceMissing` if `archive` is not a regular file
/// - `NotAnArchive` if its name has no recognized suffix
/// - `OpenFailure` if it is not a valid instance of its format
/// - `ExtractionFailure` if unpacking fails (the scratch directory is
///   removed)
/// - `NormalizeFailure` if the result cannot be moved into place
///
/// # Examples
///
/// ```no_run
/// use asplode_core::AsplodeConfig;
/// use asplode_core::extract_step;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = extract_step(
///     Path::new("/data/release.tar.gz"),
///     Path::new("/data"),
///     &AsplodeConfig::default(),
/// )?;
/// println!("unpacked into {:?}", outcome.final_path);
/// # Ok(())
/// # }
/// ```
pub fn extract_step(
    archive: &Path,
    dest_dir: &Path,
    config: &AsplodeConfig,
) -> Result<ExtractionOutcome> {
    if !archive.is_file() {
        return Err(AsplodeError::SourceMissing {
            path: archive.to_path_buf(),
        });
    }

    let detected = detect_format(archive).ok_or_else(|| AsplodeError::NotAnArchive {
        path: archive.to_path_buf(),
    })?;

    let mut backend = open_backend(archive, detected.kind)?;

    tracing::debug!(
        archive = %archive.display(),
        format = backend.format_name(),
        base_name = ?detected.base_name,
        "extracting"
    );

    let scratch = ScratchDir::create_in(dest_dir, &config.scratch_prefix)
        .map_err(|e| AsplodeError::extraction_failure(archive, e))?;

    let report = backend
        .unpack(scratch.path(), &detected.base_name, config)
        .map_err(|e| AsplodeError::extraction_failure(archive, e))?;
    drop(backend);

    normalize(scratch, &detected.base_name, dest_dir, report)
}
