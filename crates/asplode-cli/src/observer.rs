//! Bridges walk events to the output formatter.

use asplode_core::AsplodeError;
use asplode_core::AsplodeObserver;
use asplode_core::ExtractionOutcome;
use std::path::Path;

use crate::output::OutputFormatter;

/// `AsplodeObserver` that prints progress through an `OutputFormatter`.
pub struct CliObserver<'a> {
    formatter: &'a dyn OutputFormatter,
}

impl<'a> CliObserver<'a> {
    pub fn new(formatter: &'a dyn OutputFormatter) -> Self {
        Self { formatter }
    }
}

impl AsplodeObserver for CliObserver<'_> {
    fn on_archive_start(&mut self, archive: &Path, depth: usize) {
        self.formatter.format_archive_start(archive, depth);
    }

    fn on_archive_complete(&mut self, archive: &Path, outcome: &ExtractionOutcome) {
        tracing::trace!(
            archive = %archive.display(),
            nested = outcome.recursion_candidates.len(),
            "archive complete"
        );
    }

    fn on_archive_failed(&mut self, archive: &Path, error: &AsplodeError) {
        self.formatter.format_step_failure(archive, error);
    }
}
