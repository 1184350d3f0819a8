//! Regular-expression search over encoded strings.
//!
//! [`PatternMatcher`] bridges the byte-oriented `regex` engine to
//! character-level results: the subject is always presented to the engine as
//! UTF-8 text (re-encoded transparently when the string carries another
//! tag), so Unicode-mode patterns behave identically for every encoding.
//!
//! # Example
//!
//! ```
//! use charstr::{CharString, PatternMatcher};
//!
//! let subject = CharString::new("Foo123, Bar456, Foo789");
//! let result = PatternMatcher::find(&subject, r"Foo([0-9]+)", true).unwrap();
//!
//! assert_eq!(result.group(0), &[Some("Foo123".to_string()), Some("Foo789".to_string())]);
//! assert_eq!(result.group(1), &[Some("123".to_string()), Some("789".to_string())]);
//! ```

use regex::Regex;

use crate::error::InvalidPatternError;
use crate::string::CharString;

/// Structured output of a pattern search.
///
/// Matched text is indexed first by capture group (group 0 is the whole
/// match) and second by occurrence, in left-to-right scan order. A group
/// that did not participate in a given occurrence is recorded as `None`.
/// When nothing matched at all, every group's occurrence list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchResult {
    groups: Vec<Vec<Option<String>>>,
}

impl MatchResult {
    /// Returns all groups, indexed `[group][occurrence]`.
    #[inline]
    pub fn groups(&self) -> &[Vec<Option<String>>] {
        &self.groups
    }

    /// Returns the occurrences of one capture group.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a group of the pattern.
    #[inline]
    pub fn group(&self, index: usize) -> &[Option<String>] {
        &self.groups[index]
    }

    /// Returns the number of capture groups, including group 0.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns how many times the pattern matched.
    pub fn occurrence_count(&self) -> usize {
        self.groups.first().map_or(0, Vec::len)
    }

    /// Returns `true` if the pattern never matched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occurrence_count() == 0
    }

    /// Returns the first occurrence of a group, if any.
    pub fn first(&self, index: usize) -> Option<&str> {
        self.groups
            .get(index)
            .and_then(|g| g.first())
            .and_then(|m| m.as_deref())
    }
}

/// Runs regular expressions against a [`CharString`]'s content.
pub struct PatternMatcher;

impl PatternMatcher {
    /// Searches `subject` for `pattern`.
    ///
    /// The pattern uses the `regex` crate's native syntax, inline flags
    /// included. With `match_all` set, every non-overlapping match is
    /// collected left to right; otherwise at most one match is taken.
    /// Absence of a match is an empty result, not an error; only a pattern
    /// that fails to compile is.
    pub fn find(
        subject: &CharString,
        pattern: &str,
        match_all: bool,
    ) -> Result<MatchResult, InvalidPatternError> {
        let re = Regex::new(pattern).map_err(|e| InvalidPatternError::new(pattern, e))?;
        // Match against the UTF-8 view so Unicode classes see codepoints,
        // whatever the subject's storage encoding.
        let text = subject.value();

        let mut groups = vec![Vec::new(); re.captures_len()];
        if match_all {
            for caps in re.captures_iter(&text) {
                collect_occurrence(&mut groups, &caps);
            }
        } else if let Some(caps) = re.captures(&text) {
            collect_occurrence(&mut groups, &caps);
        }
        Ok(MatchResult { groups })
    }
}

fn collect_occurrence(groups: &mut [Vec<Option<String>>], caps: &regex::Captures<'_>) {
    for (index, slot) in groups.iter_mut().enumerate() {
        slot.push(caps.get(index).map(|m| m.as_str().to_string()));
    }
}
