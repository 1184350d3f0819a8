//! Encoding tags and label normalization.
//!
//! Every [`CharString`](crate::CharString) carries one [`Encoding`] tag that
//! governs how its stored bytes map to codepoints. Tags are produced by
//! [`Encoding::normalize`], which folds the common aliases of the supported
//! Japanese encodings onto canonical spellings and passes everything else
//! through verbatim.
//!
//! # Example
//!
//! ```
//! use charstr::Encoding;
//!
//! assert_eq!(Encoding::normalize("utf8"), Encoding::Utf8);
//! assert_eq!(Encoding::normalize("Shift_JIS"), Encoding::Sjis);
//! assert_eq!(Encoding::normalize("SJIS").name(), "SJIS");
//!
//! // Unrecognized labels are preserved, not rejected.
//! let other = Encoding::normalize("Windows-1252");
//! assert_eq!(other.name(), "Windows-1252");
//! ```

use core::fmt;

/// A canonical identifier for the text encoding of a [`CharString`](crate::CharString).
///
/// The recognized set covers UTF-8 plus the Japanese legacy encodings the
/// crate has first-class support for. Any other label is carried as
/// [`Encoding::Other`] with its casing preserved; constructing a tag never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8, the default for newly constructed strings.
    Utf8,
    /// Shift_JIS.
    Sjis,
    /// The Windows variant of Shift_JIS (windows-31j repertoire).
    SjisWin,
    /// EUC-JP.
    EucJp,
    /// The Windows variant of EUC-JP.
    EucJpWin,
    /// An unrecognized label, passed through verbatim.
    Other(String),
}

impl Encoding {
    /// Normalizes a user-supplied encoding label.
    ///
    /// Comparison is case-insensitive over a small alias set; the returned
    /// tag carries the canonical spelling. Labels outside the alias set pass
    /// through unchanged, so this never raises an error. Normalizing an
    /// already-canonical name returns the same tag.
    pub fn normalize(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "utf8" | "utf-8" => Self::Utf8,
            "euc-jp" => Self::EucJp,
            "sjis" | "shiftjis" | "shift_jis" => Self::Sjis,
            _ => match label {
                "SJIS-win" => Self::SjisWin,
                "eucJP-win" => Self::EucJpWin,
                _ => Self::Other(label.to_string()),
            },
        }
    }

    /// Returns the canonical name of this tag, e.g. `"UTF-8"`.
    ///
    /// For [`Encoding::Other`] this is the label as originally given.
    pub fn name(&self) -> &str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Sjis => "SJIS",
            Self::SjisWin => "SJIS-win",
            Self::EucJp => "EUC-JP",
            Self::EucJpWin => "eucJP-win",
            Self::Other(label) => label,
        }
    }

    /// Resolves this tag to the `encoding_rs` codec that backs it.
    ///
    /// Both Shift_JIS tags resolve to the WHATWG `Shift_JIS` codec (which is
    /// the windows-31j superset) and both EUC-JP tags to WHATWG `EUC-JP`.
    /// `Other` labels are looked up by label; `None` means the conversion
    /// engine does not know the encoding.
    pub fn codec(&self) -> Option<&'static encoding_rs::Encoding> {
        match self {
            Self::Utf8 => Some(encoding_rs::UTF_8),
            Self::Sjis | Self::SjisWin => Some(encoding_rs::SHIFT_JIS),
            Self::EucJp | Self::EucJpWin => Some(encoding_rs::EUC_JP),
            Self::Other(label) => encoding_rs::Encoding::for_label(label.as_bytes()),
        }
    }

    /// Returns `true` if this is the UTF-8 tag.
    #[inline]
    pub fn is_utf8(&self) -> bool {
        matches!(self, Self::Utf8)
    }
}

impl Default for Encoding {
    #[inline]
    fn default() -> Self {
        Self::Utf8
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Encoding {
    #[inline]
    fn from(label: &str) -> Self {
        Self::normalize(label)
    }
}

impl From<String> for Encoding {
    #[inline]
    fn from(label: String) -> Self {
        Self::normalize(&label)
    }
}
