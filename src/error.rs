use core::fmt;

/// An error returned by [`CharString::ord`](crate::CharString::ord) when the
/// string is empty or its bytes are malformed for the declared encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCodepointError {
    encoding: String,
    empty: bool,
}

impl InvalidCodepointError {
    /// Creates an error for an empty string.
    #[inline]
    pub(crate) fn empty(encoding: &str) -> Self {
        Self {
            encoding: encoding.to_string(),
            empty: true,
        }
    }

    /// Creates an error for content that does not decode under its encoding.
    #[inline]
    pub(crate) fn malformed(encoding: &str) -> Self {
        Self {
            encoding: encoding.to_string(),
            empty: false,
        }
    }

    /// Returns the name of the encoding the string was tagged with.
    #[inline]
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Returns `true` if the failure was caused by an empty string rather
    /// than malformed bytes.
    #[inline]
    pub const fn is_empty_input(&self) -> bool {
        self.empty
    }
}

impl fmt::Display for InvalidCodepointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.empty {
            write!(f, "cannot take the code point of an empty string")
        } else {
            write!(
                f,
                "content is not a valid {} sequence, cannot take its code point",
                self.encoding
            )
        }
    }
}

impl std::error::Error for InvalidCodepointError {}

/// An error returned during encoding conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The source encoding is not known to the conversion engine.
    UnknownSourceEncoding(String),
    /// The target encoding is not known to the conversion engine.
    UnknownTargetEncoding(String),
    /// The stored bytes are not valid for the declared source encoding.
    InvalidInput {
        /// The name of the declared source encoding.
        encoding: String,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSourceEncoding(label) => {
                write!(f, "unknown source encoding: {}", label)
            }
            Self::UnknownTargetEncoding(label) => {
                write!(f, "unknown target encoding: {}", label)
            }
            Self::InvalidInput { encoding } => {
                write!(f, "input is not a valid {} byte sequence", encoding)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// An error returned when a regular expression fails to compile.
#[derive(Debug, Clone)]
pub struct InvalidPatternError {
    pattern: String,
    source: regex::Error,
}

impl InvalidPatternError {
    #[inline]
    pub(crate) fn new(pattern: &str, source: regex::Error) -> Self {
        Self {
            pattern: pattern.to_string(),
            source,
        }
    }

    /// Returns the pattern that failed to compile.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for InvalidPatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern {:?}: {}", self.pattern, self.source)
    }
}

impl std::error::Error for InvalidPatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
