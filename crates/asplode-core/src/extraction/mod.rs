//! The extraction pipeline: one step per archive, plus the recursive walk.

pub mod engine;
pub mod layout;
pub mod scratch;
pub mod walker;

use std::path::PathBuf;

use crate::ExtractionReport;

pub use engine::extract_step;
pub use layout::Layout;
pub use layout::normalize;
pub use scratch::ScratchDir;

/// Result of one extraction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    /// The directory (or file) that now represents the archive. `None` when
    /// the archive had no entries.
    pub final_path: Option<PathBuf>,

    /// Immediate children of `final_path` whose names look like archives,
    /// sorted by name.
    pub recursion_candidates: Vec<PathBuf>,

    /// Statistics of the unpack.
    pub report: ExtractionReport,
}
