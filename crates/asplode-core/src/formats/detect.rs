//! Archive format detection from filenames.
//!
//! Detection is purely name-based and case-sensitive; file contents are
//! never inspected here.

use std::ffi::OsStr;
use std::ffi::OsString;
use std::path::Path;

/// Archive suffixes recognized by the detector, in matching order.
pub const ARCHIVE_EXTENSIONS: [&str; 7] = ["zip", "tar", "tgz", "tar.gz", "tar.bz2", "tar.bz", "gz"];

/// Backend kinds an archive suffix maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    /// ZIP container.
    Zip,
    /// Single gzip-compressed stream without member names.
    Gzip,
    /// Tar container with auto-sensed compression.
    Tar,
}

impl ArchiveKind {
    /// Maps a recognized suffix to its backend kind.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "zip" => Some(Self::Zip),
            "gz" => Some(Self::Gzip),
            "tar" | "tgz" | "tar.gz" | "tar.bz2" | "tar.bz" => Some(Self::Tar),
            _ => None,
        }
    }

    /// Returns the format name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Gzip => "gzip",
            Self::Tar => "tar",
        }
    }
}

/// Result of matching a filename against the supported suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedFormat {
    /// Backend kind.
    pub kind: ArchiveKind,
    /// Filename with the matched suffix and its separating dot removed.
    ///
    /// Kept as an `OsString` so names that are not valid UTF-8 survive
    /// unchanged.
    pub base_name: OsString,
    /// The matched suffix, e.g. `tar.gz`.
    pub extension: &'static str,
}

/// Detects the archive format from the final segment of `path`.
///
/// The leftmost dot whose remainder is a recognized suffix splits the name,
/// so compound suffixes such as `tar.gz` always win over bare `gz`. Returns
/// `None` when no suffix matches or the base name would be empty.
///
/// # Examples
///
/// ```
/// use asplode_core::formats::detect::ArchiveKind;
/// use asplode_core::formats::detect::detect_format;
/// use std::ffi::OsStr;
/// use std::ffi::OsString;
/// use std::path::Path;
///
/// let detected = detect_format(Path::new("/data/release.tar.gz")).unwrap();
/// assert_eq!(detected.kind, ArchiveKind::Tar);
/// assert_eq!(detected.base_name, "release");
/// assert_eq!(detected.extension, "tar.gz");
///
/// assert!(detect_format(Path::new("notes.txt")).is_none());
/// ```
#[must_use]
pub fn detect_format(path: &Path) -> Option<DetectedFormat> {
    let name = path.file_name()?;
    let bytes = name.as_encoded_bytes();

    // Every suffix is ASCII, so matching on the encoded bytes is exact.
    let (index, extension) = bytes
        .iter()
        .enumerate()
        .filter(|&(_, &byte)| byte == b'.')
        .find_map(|(index, _)| {
            let suffix = &bytes[index + 1..];
            ARCHIVE_EXTENSIONS
                .iter()
                .copied()
                .find(|ext| ext.as_bytes() == suffix)
                .map(|ext| (index, ext))
        })?;

    // A dotfile such as `.tar.gz` has no base name to extract into.
    if index == 0 {
        return None;
    }

    let base_name = strip_extension(name, extension)?;

    Some(DetectedFormat {
        kind: ArchiveKind::from_extension(extension)?,
        base_name,
        extension,
    })
}

/// Removes the dotted `extension` from `name` one component at a time.
fn strip_extension(name: &OsStr, extension: &str) -> Option<OsString> {
    let mut base = Path::new(name);
    for _ in 0..=extension.matches('.').count() {
        base = Path::new(base.file_stem()?);
    }
    Some(base.as_os_str().to_os_string())
}

/// Returns `true` if the last dotted component of the filename is one of
/// [`ARCHIVE_EXTENSIONS`].
///
/// This is the shallow filter used when scanning extracted content for
/// nested archives. It only looks at one segment, so `x.tar.gz` passes
/// (via `gz`) while `x.tar.bz2` does not.
#[must_use]
pub fn has_archive_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        ARCHIVE_EXTENSIONS
            .iter()
            .any(|known| known.as_bytes() == ext.as_encoded_bytes())
    })
}
