//! Recursive archive unpacking with layout normalization.
//!
//! `asplode-core` unpacks an archive next to itself and then does the same
//! for every archive found directly inside the result. Each archive ends up
//! as exactly one entry named after its base name:
//!
//! - an archive that holds a single directory named like itself is
//!   *merged*: that directory is moved into place;
//! - anything else is *collected* into a new directory with that name.
//!
//! Supported suffixes are `zip`, `tar`, `tgz`, `tar.gz`, `tar.bz2`, `tar.bz`
//! and `gz` (a single gzip stream).
//!
//! # Examples
//!
//! ```no_run
//! use asplode_core::AsplodeConfig;
//! use asplode_core::asplode;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AsplodeConfig::default();
//! let report = asplode("logs.tar.gz", "/srv/incoming", &config)?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod copy;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod report;

#[cfg(test)]
mod test_utils;

// Re-export main API types
pub use api::Asploder;
pub use api::asplode;
pub use api::asplode_with_observer;
pub use config::AsplodeConfig;
pub use error::AsplodeError;
pub use error::Result;
pub use extraction::ExtractionOutcome;
pub use extraction::extract_step;
pub use formats::detect::ArchiveKind;
pub use formats::detect::DetectedFormat;
pub use formats::detect::detect_format;
pub use report::AsplodeObserver;
pub use report::AsplodeReport;
pub use report::ExtractionReport;
pub use report::NoopObserver;
pub use report::StepFailure;
