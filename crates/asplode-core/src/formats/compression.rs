//! Compression sensing for tar streams.
//!
//! Tar archives are opened by sniffing the leading magic bytes, so a
//! `.tar.bz` that is really gzip (or an uncompressed `.tgz`) still unpacks.

/// Gzip member header magic.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Bzip2 stream header magic (`BZh`).
const BZIP2_MAGIC: [u8; 3] = *b"BZh";

/// Compression codec wrapped around a tar stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionCodec {
    /// Gzip compression (deflate algorithm).
    Gzip,

    /// Bzip2 compression (Burrows-Wheeler algorithm).
    Bzip2,
}

impl CompressionCodec {
    /// Identifies the codec from the first bytes of a file.
    ///
    /// Returns `None` for uncompressed data.
    ///
    /// # Examples
    ///
    /// ```
    /// use asplode_core::formats::compression::CompressionCodec;
    ///
    /// assert_eq!(
    ///     CompressionCodec::sniff(&[0x1f, 0x8b, 0x08]),
    ///     Some(CompressionCodec::Gzip)
    /// );
    /// assert_eq!(CompressionCodec::sniff(b"BZh91AY"), Some(CompressionCodec::Bzip2));
    /// assert_eq!(CompressionCodec::sniff(b"ustar"), None);
    /// ```
    #[must_use]
    pub fn sniff(header: &[u8]) -> Option<Self> {
        if header.starts_with(&GZIP_MAGIC) {
            Some(Self::Gzip)
        } else if header.starts_with(&BZIP2_MAGIC) {
            Some(Self::Bzip2)
        } else {
            None
        }
    }

    /// Returns a human-readable name for this codec.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
        }
    }
}

/// Returns `true` if `header` starts with the gzip magic bytes.
#[must_use]
pub fn is_gzip_magic(header: &[u8]) -> bool {
    header.starts_with(&GZIP_MAGIC)
}
