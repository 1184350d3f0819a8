//! Stateless convenience entry points.
//!
//! Each function constructs a [`CharString`], applies one operation and
//! returns the result; none of them adds logic of its own. They cover the
//! common case of one-shot operations on UTF-8 text — callers working with
//! other encodings construct a [`CharString`] with
//! [`with_encoding`](CharString::with_encoding) and use its methods directly.
//!
//! # Example
//!
//! ```
//! use charstr::facade;
//!
//! assert_eq!(facade::length("あお"), 2);
//! assert_eq!(facade::to_upper("hello").value(), "HELLO");
//! assert_eq!(facade::index_of("你好", "嗎"), -1);
//! ```

use core::cmp::Ordering;

use crate::error::InvalidPatternError;
use crate::list::CharSequenceList;
use crate::string::{CharString, Scalar};

/// Shorthand constructor for a UTF-8 tagged string.
#[inline]
pub fn s(text: &str) -> CharString {
    CharString::new(text)
}

/// Returns the codepoint length of `subject`.
pub fn length(subject: &str) -> usize {
    CharString::new(subject).len()
}

/// Returns `true` if the two strings hold the same content.
pub fn equals(a: &str, b: &str) -> bool {
    CharString::new(a).equals_to(&CharString::new(b))
}

/// Compares two strings byte-lexicographically.
pub fn compare(a: &str, b: &str) -> Ordering {
    CharString::new(a).compare_to(&CharString::new(b))
}

/// Returns the codepoint index of `search` in `subject`, or `-1`.
pub fn index_of(subject: &str, search: &str) -> isize {
    CharString::new(subject).index_of(search)
}

/// Returns `true` if `subject` contains `search`.
pub fn contains(subject: &str, search: &str) -> bool {
    CharString::new(subject).contains(search)
}

/// Returns `true` if `subject` starts with `search`.
pub fn starts_with(subject: &str, search: &str) -> bool {
    CharString::new(subject).starts_with(search)
}

/// Returns `true` if `subject` ends with `search`.
pub fn ends_with(subject: &str, search: &str) -> bool {
    CharString::new(subject).ends_with(search)
}

/// Returns a codepoint-indexed slice of `subject`.
pub fn substring(subject: &str, start: isize, length: Option<usize>) -> CharString {
    CharString::new(subject).substring(start, length)
}

/// Removes `length` characters of `subject` starting at `start`.
pub fn remove(subject: &str, start: usize, length: Option<usize>) -> CharString {
    let mut s = CharString::new(subject);
    s.remove(start, length);
    s
}

/// Inserts `text` into `subject` at codepoint index `start`.
pub fn insert(subject: &str, start: usize, text: &str) -> CharString {
    let mut s = CharString::new(subject);
    s.insert(start, text);
    s
}

/// Lower-cases `subject`.
pub fn to_lower(subject: &str) -> CharString {
    let mut s = CharString::new(subject);
    s.to_lower();
    s
}

/// Upper-cases `subject`.
pub fn to_upper(subject: &str) -> CharString {
    let mut s = CharString::new(subject);
    s.to_upper();
    s
}

/// Strips default whitespace from both ends of `subject`.
pub fn trim(subject: &str) -> CharString {
    let mut s = CharString::new(subject);
    s.trim();
    s
}

/// Strips default whitespace from the start of `subject`.
pub fn trim_start(subject: &str) -> CharString {
    let mut s = CharString::new(subject);
    s.trim_start();
    s
}

/// Strips default whitespace from the end of `subject`.
pub fn trim_end(subject: &str) -> CharString {
    let mut s = CharString::new(subject);
    s.trim_end();
    s
}

/// Replaces every literal occurrence of `search` in `subject`.
pub fn replace(subject: &str, search: &str, replacement: &str) -> CharString {
    let mut s = CharString::new(subject);
    s.replace(search, replacement);
    s
}

/// Replaces every regex match in `subject`.
pub fn replace_regex(
    subject: &str,
    pattern: &str,
    replacement: &str,
) -> Result<CharString, InvalidPatternError> {
    let mut s = CharString::new(subject);
    s.replace_regex(pattern, replacement)?;
    Ok(s)
}

/// Splits `subject` on `separator`.
pub fn split(subject: &str, separator: &str) -> CharSequenceList {
    CharString::new(subject).split(separator)
}

/// Joins `values` with `separator`.
pub fn join(separator: &str, values: &[&str]) -> CharString {
    CharString::new(&values.join(separator))
}

/// Appends scalar values to `subject`.
pub fn concat<I>(subject: &str, items: I) -> CharString
where
    I: IntoIterator<Item = Scalar>,
{
    let mut s = CharString::new(subject);
    s.concat(items);
    s
}

/// Applies `f` to every character of `subject`.
pub fn each<F>(subject: &str, f: F) -> CharString
where
    F: FnMut(CharString),
{
    let s = CharString::new(subject);
    s.each(f);
    s
}
