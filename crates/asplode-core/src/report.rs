//! Extraction reporting.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use crate::AsplodeError;
use crate::extraction::ExtractionOutcome;

/// Statistics of unpacking a single archive into its scratch directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Number of regular files written.
    pub files_extracted: usize,

    /// Number of directories created.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Number of members skipped because their path escapes the scratch
    /// directory.
    pub files_skipped: usize,

    /// Warnings generated while unpacking.
    pub warnings: Vec<String>,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A failed extraction step recorded during a recursive walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    /// Archive the step was working on.
    pub archive: PathBuf,

    /// Nesting depth of the archive (0 for the outermost one).
    pub depth: usize,

    /// Human-readable description of the error.
    pub message: String,
}

/// Summary of a complete recursive run.
#[derive(Debug, Clone, Default)]
pub struct AsplodeReport {
    /// Final path of the outermost archive, if it produced one.
    pub root: Option<PathBuf>,

    /// Final paths of every archive that was unpacked, in visiting order.
    pub extracted: Vec<PathBuf>,

    /// Number of archives unpacked successfully (including empty ones).
    pub archives_extracted: usize,

    /// Number of regular files written across all archives.
    pub files_extracted: usize,

    /// Number of directories created across all archives.
    pub directories_created: usize,

    /// Total bytes written across all archives.
    pub bytes_written: u64,

    /// Number of members skipped across all archives.
    pub files_skipped: usize,

    /// Steps that failed. Failures never abort sibling or ancestor steps.
    pub failures: Vec<StepFailure>,

    /// Warnings collected across all archives.
    pub warnings: Vec<String>,

    /// Duration of the whole run.
    pub duration: Duration,
}

impl AsplodeReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_success(&mut self, outcome: &ExtractionOutcome, depth: usize) {
        if depth == 0 {
            self.root.clone_from(&outcome.final_path);
        }
        if let Some(final_path) = &outcome.final_path {
            self.extracted.push(final_path.clone());
        }

        let stats = &outcome.report;
        self.archives_extracted += 1;
        self.files_extracted += stats.files_extracted;
        self.directories_created += stats.directories_created;
        self.bytes_written = self.bytes_written.saturating_add(stats.bytes_written);
        self.files_skipped += stats.files_skipped;
        self.warnings.extend(stats.warnings.iter().cloned());
    }

    pub(crate) fn record_failure(&mut self, archive: &Path, error: &AsplodeError, depth: usize) {
        self.failures.push(StepFailure {
            archive: archive.to_path_buf(),
            depth,
            message: error.to_string(),
        });
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns whether any step failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Callback trait for observing a recursive run.
///
/// # Examples
///
/// ```
/// use asplode_core::AsplodeError;
/// use asplode_core::AsplodeObserver;
/// use asplode_core::ExtractionOutcome;
/// use std::path::Path;
///
/// struct Printer;
///
/// impl AsplodeObserver for Printer {
///     fn on_archive_start(&mut self, archive: &Path, _depth: usize) {
///         println!(" Extracting {}", archive.display());
///     }
///
///     fn on_archive_complete(&mut self, _archive: &Path, outcome: &ExtractionOutcome) {
///         println!(" -> {:?}", outcome.final_path);
///     }
///
///     fn on_archive_failed(&mut self, _archive: &Path, error: &AsplodeError) {
///         eprintln!(" {error}");
///     }
/// }
/// ```
pub trait AsplodeObserver {
    /// Called before an archive is detected and unpacked.
    ///
    /// # Arguments
    ///
    /// * `archive` - Absolute path of the archive
    /// * `depth` - Nesting depth (0 for the outermost archive)
    fn on_archive_start(&mut self, archive: &Path, depth: usize);

    /// Called after an archive was unpacked and normalized.
    fn on_archive_complete(&mut self, archive: &Path, outcome: &ExtractionOutcome);

    /// Called when a step fails. Not called for files that are simply not
    /// archives.
    fn on_archive_failed(&mut self, archive: &Path, error: &AsplodeError);
}

/// No-op implementation of `AsplodeObserver`.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl AsplodeObserver for NoopObserver {
    fn on_archive_start(&mut self, _archive: &Path, _depth: usize) {}

    fn on_archive_complete(&mut self, _archive: &Path, _outcome: &ExtractionOutcome) {}

    fn on_archive_failed(&mut self, _archive: &Path, _error: &AsplodeError) {}
}
