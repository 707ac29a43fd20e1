//! Depth-first descent into nested archives.
//!
//! Every nested step receives its parent's final path as an explicit
//! destination, so the process working directory is never consulted.

use std::fs;
use std::path::Path;

use crate::AsplodeConfig;
use crate::AsplodeObserver;
use crate::AsplodeReport;
use crate::extraction::engine::extract_step;

/// Walks an archive and everything nested inside it, collecting a report.
pub struct Walker<'a> {
    config: &'a AsplodeConfig,
    observer: &'a mut dyn AsplodeObserver,
    report: AsplodeReport,
}

impl<'a> Walker<'a> {
    /// Creates a walker.
    pub fn new(config: &'a AsplodeConfig, observer: &'a mut dyn AsplodeObserver) -> Self {
        Self {
            config,
            observer,
            report: AsplodeReport::new(),
        }
    }

    /// Unpacks `archive` into `dest_dir` and recurses into the candidates
    /// of its result.
    ///
    /// Failures are recorded in the report and never propagate, so one bad
    /// nested archive does not stop its siblings. Returns `true` if this
    /// archive itself was unpacked.
    pub fn visit(&mut self, archive: &Path, dest_dir: &Path, depth: usize) -> bool {
        self.observer.on_archive_start(archive, depth);

        let outcome = match extract_step(archive, dest_dir, self.config) {
            Ok(outcome) => outcome,
            Err(err) if err.is_nothing_to_do() => {
                tracing::debug!(archive = %archive.display(), depth, "nothing to extract");
                return false;
            }
            Err(err) => {
                tracing::debug!(archive = %archive.display(), depth, error = %err, "extraction step failed");
                self.observer.on_archive_failed(archive, &err);
                self.report.record_failure(archive, &err, depth);
                return false;
            }
        };

        tracing::info!(
            archive = %archive.display(),
            depth,
            final_path = ?outcome.final_path,
            candidates = outcome.recursion_candidates.len(),
            "extracted"
        );
        self.observer.on_archive_complete(archive, &outcome);
        self.report.record_success(&outcome, depth);

        let Some(final_path) = outcome.final_path.as_deref() else {
            return true;
        };
        if !self.config.recursive {
            return true;
        }

        for candidate in &outcome.recursion_candidates {
            if self.visit(candidate, final_path, depth + 1) && self.config.remove_nested_archives
            {
                self.remove_nested(candidate);
            }
        }

        true
    }

    /// Consumes the walker and returns its report.
    #[must_use]
    pub fn finish(self) -> AsplodeReport {
        self.report
    }

    fn remove_nested(&mut self, candidate: &Path) {
        if let Err(err) = fs::remove_file(candidate) {
            tracing::warn!(archive = %candidate.display(), error = %err, "failed to remove nested archive");
            self.report.add_warning(format!(
                "failed to remove nested archive {}: {err}",
                candidate.display()
            ));
        }
    }
}
