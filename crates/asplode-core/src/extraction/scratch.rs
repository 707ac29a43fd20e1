//! Uniquely named scratch directories.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use tempfile::TempDir;

/// A scratch directory owned by one extraction step.
///
/// The name combines a nanosecond timestamp with a random suffix, so it
/// cannot collide with a concurrent or earlier run in the same parent.
/// Dropping the value removes the directory and its content; [`persist`]
/// hands it over to the caller instead.
///
/// [`persist`]: ScratchDir::persist
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Creates a new scratch directory inside `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create_in(parent: &Path, prefix: &str) -> io::Result<Self> {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());
        let dir = tempfile::Builder::new()
            .prefix(&format!("{prefix}{stamp}-"))
            .tempdir_in(parent)?;
        Ok(Self { dir })
    }

    /// Returns the scratch directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Lists the top-level entries, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn entries(&self) -> io::Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(self.path())?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()?;
        entries.sort();
        Ok(entries)
    }

    /// Keeps the directory on disk and returns its path.
    #[must_use]
    pub fn persist(self) -> PathBuf {
        self.dir.keep()
    }

    /// Removes the directory and everything in it.
    ///
    /// # Errors
    ///
    /// Returns an error if removal fails.
    pub fn remove(self) -> io::Result<()> {
        self.dir.close()
    }
}
