use core::fmt;

use crate::iter::Chars;
use crate::list::CharSequenceList;
use crate::string::{CharString, Scalar};

/// A fixed-width convenience wrapper around one [`CharString`].
///
/// The buffer adds fill-to-length semantics on top of the plain string:
/// [`fill`](Self::fill) pads the content up to a target codepoint length by
/// repeating a fill unit, cutting the final repetition at the boundary.
/// Filling never truncates existing content; only an explicit
/// [`truncate`](Self::truncate) can shrink it.
///
/// # Example
///
/// ```
/// use charstr::{CharString, FixedTextBuffer};
///
/// let mut buf = FixedTextBuffer::new(CharString::new("Hello"));
/// buf.fill(20, "-=~");
/// assert_eq!(buf.len(), 20);
/// assert_eq!(buf.to_char_string().value(), "Hello-=~-=~-=~-=~-=~");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTextBuffer {
    string: CharString,
}

impl FixedTextBuffer {
    /// Wraps a string without padding it.
    pub fn new(string: CharString) -> Self {
        Self { string }
    }

    /// Wraps a string and immediately pads it to at least `length`
    /// codepoints using `fill`.
    pub fn with_fill(string: CharString, length: usize, fill: &str) -> Self {
        let mut buffer = Self { string };
        buffer.fill(length, fill);
        buffer
    }

    /// Pads the content with repetitions of `fill` until it is exactly
    /// `length` codepoints long.
    ///
    /// A no-op when `fill` is empty or the content is already at least
    /// `length` long. The repeated unit may be cut mid-repetition at the
    /// boundary.
    pub fn fill(&mut self, length: usize, fill: &str) -> &mut Self {
        if fill.is_empty() {
            return self;
        }
        let deficit = length.saturating_sub(self.string.len());
        if deficit == 0 {
            return self;
        }
        let repeat = deficit / fill.chars().count() + 1;
        self.string.append(&fill.repeat(repeat));
        self.string.truncate(length);
        self
    }

    /// Shortens the content to at most `length` codepoints.
    pub fn truncate(&mut self, length: usize) -> &mut Self {
        self.string.truncate(length);
        self
    }

    /// Returns a codepoint-indexed slice of the content as a string.
    pub fn substring(&self, start: isize, length: Option<usize>) -> CharString {
        self.string.substring(start, length)
    }

    /// Returns a codepoint-indexed slice of the content as a new buffer.
    pub fn slice(&self, start: isize, length: Option<usize>) -> FixedTextBuffer {
        Self::new(self.string.substring(start, length))
    }

    /// Replaces the wrapped string.
    pub fn set(&mut self, string: CharString) -> &mut Self {
        self.string = string;
        self
    }

    /// Returns the content length in codepoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.string.len()
    }

    /// Returns `true` if the buffer holds no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.string.is_empty()
    }

    /// Empties the buffer.
    pub fn clear(&mut self) -> &mut Self {
        self.string.clear();
        self
    }

    /// Appends text to the buffered string.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.string.append(text);
        self
    }

    /// Appends a sequence of scalar values, like
    /// [`CharString::concat`](crate::CharString::concat).
    pub fn concat<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = Scalar>,
    {
        self.string.concat(items);
        self
    }

    /// Splits the buffered string into a fragment list.
    pub fn split(&self, separator: &str) -> CharSequenceList {
        self.string.split(separator)
    }

    /// Returns an iterator over single-character strings.
    pub fn chars(&self) -> Chars {
        self.string.chars()
    }

    /// Returns a reference to the wrapped string.
    #[inline]
    pub fn to_char_string(&self) -> &CharString {
        &self.string
    }

    /// Consumes the buffer, returning the wrapped string.
    #[inline]
    pub fn into_char_string(self) -> CharString {
        self.string
    }
}

impl From<&FixedTextBuffer> for Scalar {
    fn from(buffer: &FixedTextBuffer) -> Self {
        Scalar::from(buffer.to_char_string())
    }
}

impl fmt::Display for FixedTextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.string, f)
    }
}
