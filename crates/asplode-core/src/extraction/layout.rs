//! Post-extraction layout normalization.
//!
//! Freshly unpacked content is collapsed into one of two shapes next to the
//! archive's destination:
//!
//! - **merge**: the archive held a single directory named after itself,
//!   which is moved up and the scratch directory dropped;
//! - **collect**: anything else, where the scratch directory itself is
//!   renamed to the base name.
//!
//! An archive without entries produces nothing at all.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::AsplodeError;
use crate::ExtractionReport;
use crate::Result;
use crate::extraction::ExtractionOutcome;
use crate::extraction::scratch::ScratchDir;
use crate::formats::detect::has_archive_extension;

/// Shape of a scratch directory's top level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// No entries at all.
    Empty,
    /// One directory whose name equals the base name.
    Merge(PathBuf),
    /// Several entries, a single differently named entry, or a single plain
    /// file.
    Collect,
}

/// Classifies sorted top-level `entries` against `leaf`, the final segment
/// of the base name.
#[must_use]
pub fn classify(entries: &[PathBuf], leaf: &OsStr) -> Layout {
    match entries {
        [] => Layout::Empty,
        [only]
            if only.file_name().is_some_and(|name| name == leaf)
                && fs::symlink_metadata(only).is_ok_and(|meta| meta.is_dir()) =>
        {
            Layout::Merge(only.clone())
        }
        _ => Layout::Collect,
    }
}

/// Moves extracted content out of `scratch` into `dest_dir` and lists the
/// nested archives of the result.
///
/// # Errors
///
/// Returns `NormalizeFailure` if the scratch directory cannot be listed,
/// the target name already exists in `dest_dir`, or a move fails. On error
/// the scratch directory is left on disk.
pub fn normalize(
    scratch: ScratchDir,
    base_name: &OsStr,
    dest_dir: &Path,
    report: ExtractionReport,
) -> Result<ExtractionOutcome> {
    let leaf = Path::new(base_name)
        .file_name()
        .ok_or_else(|| {
            AsplodeError::normalize_failure(
                scratch.path(),
                io::Error::new(io::ErrorKind::InvalidInput, "empty base name"),
            )
        })?
        .to_owned();
    let target = dest_dir.join(&leaf);

    let entries = scratch
        .entries()
        .map_err(|e| AsplodeError::normalize_failure(scratch.path(), e))?;

    let final_path = match classify(&entries, &leaf) {
        Layout::Empty => {
            tracing::debug!(scratch = %scratch.path().display(), "archive had no entries");
            let scratch_path = scratch.path().to_path_buf();
            scratch
                .remove()
                .map_err(|e| AsplodeError::normalize_failure(&scratch_path, e))?;
            return Ok(ExtractionOutcome {
                final_path: None,
                recursion_candidates: Vec::new(),
                report,
            });
        }
        Layout::Merge(entry) => {
            let scratch_path = scratch.persist();
            move_into_place(&entry, &target)?;
            fs::remove_dir(&scratch_path)
                .map_err(|e| AsplodeError::normalize_failure(&scratch_path, e))?;
            tracing::debug!(target = %target.display(), "merged single top-level directory");
            target
        }
        Layout::Collect => {
            let scratch_path = scratch.persist();
            move_into_place(&scratch_path, &target)?;
            tracing::debug!(target = %target.display(), "collected entries into directory");
            target
        }
    };

    let recursion_candidates = scan_candidates(&final_path)
        .map_err(|e| AsplodeError::normalize_failure(&final_path, e))?;

    Ok(ExtractionOutcome {
        final_path: Some(final_path),
        recursion_candidates,
        report,
    })
}

/// Lists the immediate children of `dir` that look like archives, sorted by
/// name. Returns nothing if `dir` is not a directory.
///
/// Only one level is inspected; archives deeper in the tree are not
/// candidates.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_candidates(dir: &Path) -> io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if has_archive_extension(&path) {
            candidates.push(path);
        }
    }
    candidates.sort();
    Ok(candidates)
}

/// Renames `from` to `to`, refusing to replace anything already at `to`.
fn move_into_place(from: &Path, to: &Path) -> Result<()> {
    if fs::symlink_metadata(to).is_ok() {
        return Err(AsplodeError::normalize_failure(
            to,
            io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ),
        ));
    }
    fs::rename(from, to).map_err(|e| AsplodeError::normalize_failure(from, e))
}
