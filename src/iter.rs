use core::iter::FusedIterator;

use crate::encoding::Encoding;
use crate::string::CharString;

/// An iterator over the characters of a [`CharString`].
///
/// Yields one single-character `CharString` per codepoint, tagged with the
/// source's encoding. The content is snapshotted when the iterator is
/// created, so mutating the source mid-iteration cannot invalidate it.
#[derive(Debug, Clone)]
pub struct Chars {
    text: String,
    offset: usize,
    encoding: Encoding,
}

impl Chars {
    #[inline]
    pub(crate) fn new(source: &CharString) -> Self {
        Self {
            text: source.value().into_owned(),
            offset: 0,
            encoding: source.encoding().clone(),
        }
    }

    /// Views the not-yet-iterated remainder of the snapshot.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text[self.offset..]
    }
}

impl Iterator for Chars {
    type Item = CharString;

    fn next(&mut self) -> Option<CharString> {
        let c = self.text[self.offset..].chars().next()?;
        self.offset += c.len_utf8();
        Some(CharString::with_encoding(
            c.encode_utf8(&mut [0u8; 4]),
            self.encoding.clone(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.offset;
        // One to four snapshot bytes per codepoint.
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl FusedIterator for Chars {}
