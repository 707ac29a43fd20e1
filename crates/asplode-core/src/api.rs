//! High-level public API for recursive archive unpacking.

use std::path::Path;
use std::time::Instant;

use crate::AsplodeConfig;
use crate::AsplodeError;
use crate::AsplodeObserver;
use crate::AsplodeReport;
use crate::NoopObserver;
use crate::Result;
use crate::extraction::walker::Walker;
use crate::formats::detect::detect_format;

/// Recursively unpacks `archive` into `dest_dir`.
///
/// On success `dest_dir` gains one new entry named after the archive's base
/// name. Archives found directly inside the result are unpacked in turn,
/// each next to itself.
///
/// # Arguments
///
/// * `archive` - Path to the archive file
/// * `dest_dir` - Directory that receives the result
/// * `config` - Unpacking options
///
/// # Errors
///
/// Only the outermost archive's preliminary checks produce an error:
/// `SourceMissing` if it is not a regular file and `NotAnArchive` if its
/// name has no recognized suffix. Every later failure, including failing to
/// unpack the outermost archive, is recorded in
/// [`AsplodeReport::failures`].
///
/// # Examples
///
/// ```no_run
/// use asplode_core::AsplodeConfig;
/// use asplode_core::asplode;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = asplode("bundle.zip", ".", &AsplodeConfig::default())?;
/// println!("Unpacked {} archives", report.archives_extracted);
/// for failure in &report.failures {
///     eprintln!("{}: {}", failure.archive.display(), failure.message);
/// }
/// # Ok(())
/// # }
/// ```
pub fn asplode<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    dest_dir: Q,
    config: &AsplodeConfig,
) -> Result<AsplodeReport> {
    let mut observer = NoopObserver;
    asplode_with_observer(archive, dest_dir, config, &mut observer)
}

/// Recursively unpacks `archive` into `dest_dir`, reporting every step to
/// `observer`.
///
/// Relative paths are resolved against the current directory once, up
/// front; the walk itself only handles absolute paths.
///
/// # Errors
///
/// Same as [`asplode`].
pub fn asplode_with_observer<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    dest_dir: Q,
    config: &AsplodeConfig,
    observer: &mut dyn AsplodeObserver,
) -> Result<AsplodeReport> {
    let archive = std::path::absolute(archive.as_ref()).map_err(|_| {
        AsplodeError::SourceMissing {
            path: archive.as_ref().to_path_buf(),
        }
    })?;
    let dest_dir = std::path::absolute(dest_dir.as_ref())
        .map_err(|e| AsplodeError::normalize_failure(dest_dir.as_ref(), e))?;

    if !archive.is_file() {
        return Err(AsplodeError::SourceMissing { path: archive });
    }
    if detect_format(&archive).is_none() {
        return Err(AsplodeError::NotAnArchive { path: archive });
    }

    let start = Instant::now();
    let mut walker = Walker::new(config, observer);
    walker.visit(&archive, &dest_dir, 0);
    let mut report = walker.finish();
    report.duration = start.elapsed();

    Ok(report)
}

/// Reusable entry point holding an [`AsplodeConfig`].
///
/// # Examples
///
/// ```no_run
/// use asplode_core::AsplodeConfig;
/// use asplode_core::Asploder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let asploder = Asploder::new(AsplodeConfig::default().with_recursive(false));
/// for archive in ["a.zip", "b.tar.gz"] {
///     let report = asploder.process(archive, "/srv/incoming")?;
///     println!("{archive}: {:?}", report.root);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Asploder {
    config: AsplodeConfig,
}

impl Asploder {
    /// Creates an asploder with the given configuration.
    #[must_use]
    pub const fn new(config: AsplodeConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &AsplodeConfig {
        &self.config
    }

    /// Recursively unpacks `archive` into `dest_dir`.
    ///
    /// # Errors
    ///
    /// Same as [`asplode`].
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        archive: P,
        dest_dir: Q,
    ) -> Result<AsplodeReport> {
        asplode(archive, dest_dir, &self.config)
    }

    /// Recursively unpacks `archive` into `dest_dir`, reporting every step
    /// to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`asplode`].
    pub fn process_with_observer<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        archive: P,
        dest_dir: Q,
        observer: &mut dyn AsplodeObserver,
    ) -> Result<AsplodeReport> {
        asplode_with_observer(archive, dest_dir, &self.config, observer)
    }
}
