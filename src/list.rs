use core::fmt;
use core::ops::Index;

use serde::ser::{Serialize, Serializer};

use crate::encoding::Encoding;
use crate::string::CharString;

/// An ordered list of text fragments, as produced by
/// [`CharString::split`](crate::CharString::split).
///
/// The list inherits the encoding tag of the string that produced it, so
/// [`join`](Self::join) reconstructs a string under the same tag. The JSON
/// form is the plain array of fragments.
///
/// # Example
///
/// ```
/// use charstr::CharString;
///
/// let list = CharString::new("a,b,c").split(",");
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(1), Some("b"));
/// assert_eq!(list.join("-").value(), "a-b-c");
/// assert_eq!(list.to_json(), r#"["a","b","c"]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSequenceList {
    values: Vec<String>,
    encoding: Encoding,
}

impl CharSequenceList {
    /// Creates a list from fragments and the encoding tag they belong to.
    pub fn new(values: Vec<String>, encoding: Encoding) -> Self {
        Self { values, encoding }
    }

    /// Creates an empty UTF-8 tagged list.
    pub fn empty() -> Self {
        Self {
            values: Vec::new(),
            encoding: Encoding::Utf8,
        }
    }

    /// Returns the fragments in order.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the encoding tag inherited from the producing string.
    #[inline]
    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    /// Returns the fragment at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Appends a fragment.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.values.push(text.to_string());
        self
    }

    /// Overwrites the fragment at `index`. Out-of-range indices are
    /// silently ignored.
    pub fn set_at(&mut self, index: usize, text: &str) -> &mut Self {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = text.to_string();
        }
        self
    }

    /// Returns the number of fragments.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the list holds no fragments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Joins the fragments with `separator` into a string under the
    /// inherited encoding tag. The empty list joins to the empty string
    /// regardless of separator.
    pub fn join(&self, separator: &str) -> CharString {
        CharString::with_encoding(&self.values.join(separator), self.encoding.clone())
    }

    /// Returns an iterator over the fragments.
    pub fn iter(&self) -> core::slice::Iter<'_, String> {
        self.values.iter()
    }

    /// Renders the fragments as a JSON array.
    pub fn to_json(&self) -> String {
        // Vec<String> serialization cannot fail.
        serde_json::to_string(&self.values).unwrap_or_default()
    }
}

impl Serialize for CharSequenceList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl Index<usize> for CharSequenceList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a CharSequenceList {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for CharSequenceList {
    /// Displays as the JSON array of fragments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}
