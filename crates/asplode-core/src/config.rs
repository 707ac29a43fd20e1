//! Configuration for recursive archive unpacking.

/// Default prefix of scratch directory names.
pub const DEFAULT_SCRATCH_PREFIX: &str = ".asplode-";

/// Options controlling how archives are unpacked and normalized.
///
/// # Examples
///
/// ```
/// use asplode_core::AsplodeConfig;
///
/// // Unpack only the outermost archive and keep nested ones packed.
/// let config = AsplodeConfig::default().with_recursive(false);
/// assert!(!config.recursive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsplodeConfig {
    /// Descend into archives found one level below each extraction.
    pub recursive: bool,

    /// Delete a nested archive file once it has been unpacked successfully.
    ///
    /// The outermost archive is never removed.
    pub remove_nested_archives: bool,

    /// Prefix of the scratch directories created next to the final output.
    pub scratch_prefix: String,

    /// Apply Unix permission bits stored in archive members.
    pub preserve_permissions: bool,
}

impl Default for AsplodeConfig {
    /// Default values:
    /// - `recursive`: true
    /// - `remove_nested_archives`: true
    /// - `scratch_prefix`: `.asplode-`
    /// - `preserve_permissions`: false
    fn default() -> Self {
        Self {
            recursive: true,
            remove_nested_archives: true,
            scratch_prefix: DEFAULT_SCRATCH_PREFIX.to_string(),
            preserve_permissions: false,
        }
    }
}

impl AsplodeConfig {
    /// Sets whether nested archives are unpacked.
    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets whether nested archive files are deleted after unpacking.
    #[must_use]
    pub fn with_remove_nested_archives(mut self, remove: bool) -> Self {
        self.remove_nested_archives = remove;
        self
    }

    /// Sets the scratch directory prefix.
    #[must_use]
    pub fn with_scratch_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.scratch_prefix = prefix.into();
        self
    }

    /// Sets whether stored permission bits are applied.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AsplodeConfig::default();
        assert!(config.recursive);
        assert!(config.remove_nested_archives);
        assert!(!config.preserve_permissions);
        assert_eq!(config.scratch_prefix, ".asplode-");
    }

    #[test]
    fn test_builder_methods() {
        let config = AsplodeConfig::default()
            .with_recursive(false)
            .with_remove_nested_archives(false)
            .with_scratch_prefix("tmp-")
            .with_preserve_permissions(true);
        assert!(!config.recursive);
        assert!(!config.remove_nested_archives);
        assert!(config.preserve_permissions);
        assert_eq!(config.scratch_prefix, "tmp-");
    }
}
