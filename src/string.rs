use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::borrow::Cow;

use crate::encoding::Encoding;
use crate::error::{ConvertError, InvalidCodepointError, InvalidPatternError};
use crate::iter::Chars;
use crate::list::CharSequenceList;
use crate::pattern::{MatchResult, PatternMatcher};

/// The character set stripped by the default `trim` family.
const DEFAULT_TRIM: &str = " \t\n\r\0\x0B";

/// An owned, encoding-tagged character string.
///
/// A `CharString` stores its text as raw bytes in the encoding named by its
/// tag, and exposes operations that index by codepoint rather than by byte.
/// The tag is fixed at construction; only [`encode_to`](Self::encode_to)
/// produces a string under a different tag.
///
/// Mutating operations return `&mut Self` so calls can be chained:
///
/// ```
/// use charstr::CharString;
///
/// let mut s = CharString::new("  Hello  ");
/// s.trim().append(", world").to_lower();
/// assert_eq!(s.value(), "hello, world");
/// ```
///
/// Codepoint indexing holds for multi-byte text:
///
/// ```
/// use charstr::CharString;
///
/// let s = CharString::new("あお");
/// assert_eq!(s.len(), 2);
/// assert_eq!(s.substring(1, None).value(), "お");
/// ```
pub struct CharString {
    bytes: Vec<u8>,
    encoding: Encoding,
}

impl CharString {
    // === Construction ===

    /// Creates a new UTF-8 tagged string holding `text`.
    #[inline]
    pub fn new(text: &str) -> Self {
        Self {
            bytes: text.as_bytes().to_vec(),
            encoding: Encoding::Utf8,
        }
    }

    /// Creates a string tagged with the given encoding.
    ///
    /// The label is normalized via [`Encoding::normalize`] and `text` is
    /// transcoded into that encoding for storage.
    pub fn with_encoding(text: &str, encoding: impl Into<Encoding>) -> Self {
        let encoding = encoding.into();
        let bytes = encode_text(&encoding, text);
        Self { bytes, encoding }
    }

    /// Creates a string from raw bytes assumed to already be in the given
    /// encoding. The bytes are stored verbatim, without validation.
    pub fn from_bytes(bytes: Vec<u8>, encoding: impl Into<Encoding>) -> Self {
        Self {
            bytes,
            encoding: encoding.into(),
        }
    }

    // === Queries ===

    /// Returns `true` if the string holds no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the content as text, decoded from the declared encoding.
    ///
    /// Bytes that do not decode are substituted with U+FFFD; use
    /// [`encode_to`](Self::encode_to) when strict validation is needed.
    pub fn value(&self) -> Cow<'_, str> {
        match self.encoding.codec() {
            Some(codec) => codec.decode_without_bom_handling(&self.bytes).0,
            None => String::from_utf8_lossy(&self.bytes),
        }
    }

    /// Returns the raw stored bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the string, returning its raw bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the encoding tag.
    #[inline]
    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    /// Returns the length in codepoints, not bytes.
    pub fn len(&self) -> usize {
        self.value().chars().count()
    }

    /// Returns the code point of the first character.
    ///
    /// Fails if the string is empty or its bytes are malformed for the
    /// declared encoding.
    pub fn ord(&self) -> Result<u32, InvalidCodepointError> {
        if self.bytes.is_empty() {
            return Err(InvalidCodepointError::empty(self.encoding.name()));
        }
        let text = self
            .decode_strict()
            .ok_or_else(|| InvalidCodepointError::malformed(self.encoding.name()))?;
        match text.chars().next() {
            Some(c) => Ok(c as u32),
            None => Err(InvalidCodepointError::malformed(self.encoding.name())),
        }
    }

    /// Returns the codepoint index of the first occurrence of `search`,
    /// or `-1` when absent.
    pub fn index_of(&self, search: &str) -> isize {
        let text = self.value();
        match text.find(search) {
            Some(pos) => text[..pos].chars().count() as isize,
            None => -1,
        }
    }

    /// Returns `true` if the string contains `search`.
    pub fn contains(&self, search: &str) -> bool {
        self.value().contains(search)
    }

    /// Returns `true` if the string starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.value().starts_with(prefix)
    }

    /// Returns `true` if the string ends with `suffix`.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.value().ends_with(suffix)
    }

    /// Compares the stored bytes against `value` encoded under this string's
    /// tag, byte-lexicographically.
    pub fn compare(&self, value: &str) -> Ordering {
        self.bytes
            .as_slice()
            .cmp(encode_text(&self.encoding, value).as_slice())
    }

    /// Compares the stored bytes of two strings byte-lexicographically.
    #[inline]
    pub fn compare_to(&self, other: &CharString) -> Ordering {
        self.bytes.cmp(&other.bytes)
    }

    /// Returns `true` if the stored content equals `value`.
    #[inline]
    pub fn equals(&self, value: &str) -> bool {
        self.compare(value) == Ordering::Equal
    }

    /// Returns `true` if two strings hold identical bytes.
    #[inline]
    pub fn equals_to(&self, other: &CharString) -> bool {
        self.bytes == other.bytes
    }

    // === Mutation ===

    /// Replaces the content, keeping the encoding tag.
    pub fn set(&mut self, text: &str) -> &mut Self {
        self.bytes = encode_text(&self.encoding, text);
        self
    }

    /// Resets the string to empty. The encoding tag is unchanged.
    pub fn clear(&mut self) -> &mut Self {
        self.bytes.clear();
        self
    }

    /// Appends `text` to the end of the string.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.bytes.extend(encode_text(&self.encoding, text));
        self
    }

    /// Inserts `text` before the first character.
    pub fn prepend(&mut self, text: &str) -> &mut Self {
        let mut bytes = encode_text(&self.encoding, text);
        bytes.extend_from_slice(&self.bytes);
        self.bytes = bytes;
        self
    }

    /// Inserts `text` at the given codepoint index.
    ///
    /// An index past the end appends.
    pub fn insert(&mut self, at: usize, text: &str) -> &mut Self {
        let current = self.value().into_owned();
        let split = byte_offset_of(&current, at);
        let mut out = String::with_capacity(current.len() + text.len());
        out.push_str(&current[..split]);
        out.push_str(text);
        out.push_str(&current[split..]);
        self.set(&out)
    }

    /// Removes `length` characters starting at codepoint index `at`.
    ///
    /// When `length` is omitted (or zero), everything from `at` to the end
    /// is removed.
    pub fn remove(&mut self, at: usize, length: Option<usize>) -> &mut Self {
        let current = self.value().into_owned();
        let start = byte_offset_of(&current, at);
        let mut out = String::new();
        out.push_str(&current[..start]);
        if let Some(len) = length {
            if len > 0 {
                let end = byte_offset_of(&current, at + len);
                out.push_str(&current[end..]);
            }
        }
        self.set(&out)
    }

    /// Replaces every literal occurrence of `search` with `replacement`.
    pub fn replace(&mut self, search: &str, replacement: &str) -> &mut Self {
        let replaced = self.value().replace(search, replacement);
        self.set(&replaced)
    }

    /// Replaces every match of a regular expression with `replacement`.
    ///
    /// Pattern and replacement follow the `regex` crate's syntax, so capture
    /// groups can be referenced as `$1`, `$2`, ….
    pub fn replace_regex(
        &mut self,
        pattern: &str,
        replacement: &str,
    ) -> Result<&mut Self, InvalidPatternError> {
        let re = regex::Regex::new(pattern).map_err(|e| InvalidPatternError::new(pattern, e))?;
        let replaced = re.replace_all(&self.value(), replacement).into_owned();
        Ok(self.set(&replaced))
    }

    /// Shortens the string to at most `max_length` codepoints.
    ///
    /// Never cuts a multi-byte character in half; a `max_length` at or past
    /// the current length leaves the string unchanged.
    pub fn truncate(&mut self, max_length: usize) -> &mut Self {
        let current = self.value().into_owned();
        let end = byte_offset_of(&current, max_length);
        if end < current.len() {
            let kept = current[..end].to_string();
            self.set(&kept);
        }
        self
    }

    /// Strips the default whitespace set from both ends.
    pub fn trim(&mut self) -> &mut Self {
        self.trim_matches(DEFAULT_TRIM)
    }

    /// Strips the default whitespace set from the start.
    pub fn trim_start(&mut self) -> &mut Self {
        self.trim_start_matches(DEFAULT_TRIM)
    }

    /// Strips the default whitespace set from the end.
    pub fn trim_end(&mut self) -> &mut Self {
        self.trim_end_matches(DEFAULT_TRIM)
    }

    /// Strips any character in `characters` from both ends.
    pub fn trim_matches(&mut self, characters: &str) -> &mut Self {
        let trimmed = self
            .value()
            .trim_matches(|c| characters.contains(c))
            .to_string();
        self.set(&trimmed)
    }

    /// Strips any character in `characters` from the start.
    pub fn trim_start_matches(&mut self, characters: &str) -> &mut Self {
        let trimmed = self
            .value()
            .trim_start_matches(|c| characters.contains(c))
            .to_string();
        self.set(&trimmed)
    }

    /// Strips any character in `characters` from the end.
    pub fn trim_end_matches(&mut self, characters: &str) -> &mut Self {
        let trimmed = self
            .value()
            .trim_end_matches(|c| characters.contains(c))
            .to_string();
        self.set(&trimmed)
    }

    /// Lower-cases the content. Characters with no case concept (CJK text,
    /// digits, punctuation) pass through unchanged.
    pub fn to_lower(&mut self) -> &mut Self {
        let lowered = self.value().to_lowercase();
        self.set(&lowered)
    }

    /// Upper-cases the content. Characters with no case concept pass through
    /// unchanged.
    pub fn to_upper(&mut self) -> &mut Self {
        let raised = self.value().to_uppercase();
        self.set(&raised)
    }

    /// Appends a sequence of scalar values, stringified per [`Scalar`].
    ///
    /// [`Scalar::Nil`] items are skipped, not errors.
    ///
    /// ```
    /// use charstr::{CharString, Scalar};
    ///
    /// let mut s = CharString::new("こんにちは");
    /// s.concat([
    ///     Scalar::from(":"),
    ///     Scalar::from(true),
    ///     Scalar::Nil,
    ///     Scalar::from(3.14),
    /// ]);
    /// assert_eq!(s.value(), "こんにちは:true3.14");
    /// ```
    pub fn concat<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = Scalar>,
    {
        for item in items {
            if let Some(text) = item.into_text() {
                self.append(&text);
            }
        }
        self
    }

    // === Slicing and splitting ===

    /// Returns a new string holding a codepoint-indexed slice.
    ///
    /// A negative `start` counts from the end (`-2` means the last two
    /// characters); an omitted `length` means "to the end". Out-of-range
    /// bounds clamp rather than fail.
    pub fn substring(&self, start: isize, length: Option<usize>) -> CharString {
        let text = self.value();
        let total = text.chars().count();
        let begin = if start < 0 {
            total.saturating_sub(start.unsigned_abs())
        } else {
            (start as usize).min(total)
        };
        let taken: String = match length {
            Some(len) => text.chars().skip(begin).take(len).collect(),
            None => text.chars().skip(begin).collect(),
        };
        CharString {
            bytes: encode_text(&self.encoding, &taken),
            encoding: self.encoding.clone(),
        }
    }

    /// Splits the string into a fragment list.
    ///
    /// An empty separator splits into individual codepoints. A non-empty
    /// separator splits literally: consecutive separators produce empty
    /// fragments, and an absent separator yields the whole string as the
    /// only fragment.
    pub fn split(&self, separator: &str) -> CharSequenceList {
        let text = self.value();
        let fragments: Vec<String> = if separator.is_empty() {
            text.chars().map(String::from).collect()
        } else {
            text.split(separator).map(str::to_string).collect()
        };
        CharSequenceList::new(fragments, self.encoding.clone())
    }

    // === Conversion ===

    /// Converts the stored bytes to another encoding, returning a new string
    /// tagged with the target. The original is untouched.
    ///
    /// Fails when the stored bytes are not valid for the declared source
    /// encoding, or when either encoding is unknown to the conversion engine.
    pub fn encode_to(&self, target: impl Into<Encoding>) -> Result<CharString, ConvertError> {
        let target = target.into();
        let source_codec = self
            .encoding
            .codec()
            .ok_or_else(|| ConvertError::UnknownSourceEncoding(self.encoding.name().to_string()))?;
        let target_codec = target
            .codec()
            .ok_or_else(|| ConvertError::UnknownTargetEncoding(target.name().to_string()))?;
        let text = source_codec
            .decode_without_bom_handling_and_without_replacement(&self.bytes)
            .ok_or_else(|| ConvertError::InvalidInput {
                encoding: self.encoding.name().to_string(),
            })?;
        let (bytes, _, _) = target_codec.encode(&text);
        Ok(CharString {
            bytes: bytes.into_owned(),
            encoding: target,
        })
    }

    // === Pattern matching ===

    /// Runs a regular expression against the content.
    ///
    /// The subject is presented to the engine as UTF-8 regardless of the
    /// declared encoding, so Unicode-mode patterns behave identically for
    /// every tag. With `match_all` set, every non-overlapping match is
    /// collected left to right; otherwise at most one.
    pub fn matches(
        &self,
        pattern: &str,
        match_all: bool,
    ) -> Result<MatchResult, InvalidPatternError> {
        PatternMatcher::find(self, pattern, match_all)
    }

    // === Iteration ===

    /// Returns an iterator over single-character strings, advancing one
    /// codepoint at a time.
    ///
    /// The iterator works over a snapshot of the content taken here, so
    /// mutating the source afterwards does not affect an iteration already
    /// in progress.
    pub fn chars(&self) -> Chars {
        Chars::new(self)
    }

    /// Applies `f` to every character in order.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(CharString),
    {
        for c in self.chars() {
            f(c);
        }
        self
    }

    // === Internal ===

    fn decode_strict(&self) -> Option<Cow<'_, str>> {
        self.encoding
            .codec()?
            .decode_without_bom_handling_and_without_replacement(&self.bytes)
    }
}

/// Encodes UTF-8 text into the byte representation of the given tag.
///
/// Tags the conversion engine does not know fall back to storing the UTF-8
/// bytes as-is.
fn encode_text(encoding: &Encoding, text: &str) -> Vec<u8> {
    match encoding.codec() {
        Some(codec) => {
            let (bytes, _, _) = codec.encode(text);
            bytes.into_owned()
        }
        None => text.as_bytes().to_vec(),
    }
}

/// Byte offset of the `index`-th codepoint in `text`, clamped to the end.
fn byte_offset_of(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(pos, _)| pos)
        .unwrap_or(text.len())
}

// === Trait implementations ===

impl Clone for CharString {
    /// Deep-copies both the content and the encoding tag.
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            encoding: self.encoding.clone(),
        }
    }
}

impl Default for CharString {
    #[inline]
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for CharString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

impl fmt::Debug for CharString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharString")
            .field("value", &self.value())
            .field("encoding", &self.encoding.name())
            .finish()
    }
}

impl PartialEq for CharString {
    /// Equality over the stored bytes, matching [`CharString::equals_to`].
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for CharString {}

impl PartialEq<str> for CharString {
    fn eq(&self, other: &str) -> bool {
        self.equals(other)
    }
}

impl PartialEq<&str> for CharString {
    fn eq(&self, other: &&str) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for CharString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CharString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl Hash for CharString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state)
    }
}

impl From<&str> for CharString {
    #[inline]
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<'a> IntoIterator for &'a CharString {
    type Item = CharString;
    type IntoIter = Chars;

    fn into_iter(self) -> Chars {
        self.chars()
    }
}

/// A scalar value accepted by [`CharString::concat`].
///
/// This is the closed set of things that have a fixed textual form:
/// text itself, integers and floats via their canonical decimal text,
/// booleans as `"true"` / `"false"`, and [`Scalar::Nil`] for values with no
/// textual form, which concatenation skips silently.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text, appended as-is.
    Text(String),
    /// A signed integer, stringified in decimal.
    Int(i64),
    /// A float, stringified in its shortest decimal form.
    Float(f64),
    /// A boolean, stringified as `"true"` or `"false"`.
    Bool(bool),
    /// A value with no textual form; skipped by concatenation.
    Nil,
}

impl Scalar {
    /// Wraps any displayable value as its rendered text.
    pub fn display<T: fmt::Display>(value: T) -> Self {
        Self::Text(value.to_string())
    }

    /// Returns the textual form, or `None` for [`Scalar::Nil`].
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(x) => Some(x.to_string()),
            Self::Bool(true) => Some("true".to_string()),
            Self::Bool(false) => Some("false".to_string()),
            Self::Nil => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&CharString> for Scalar {
    fn from(s: &CharString) -> Self {
        Self::Text(s.value().into_owned())
    }
}

impl From<char> for Scalar {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
