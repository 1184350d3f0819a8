//! Encoding-tagged character strings with codepoint-indexed operations.
//!
//! This crate provides [`CharString`], a string value type that carries an
//! explicit [`Encoding`] tag and indexes by codepoint rather than by byte,
//! so slicing, searching and mutation stay correct for UTF-8, Shift_JIS and
//! EUC-JP text alike. Around the core type sit a pattern-matching façade
//! over the `regex` engine ([`PatternMatcher`]), a split/join fragment list
//! ([`CharSequenceList`]) and a fill-to-length buffer ([`FixedTextBuffer`]).
//!
//! # Example
//!
//! ```
//! use charstr::CharString;
//!
//! let s = CharString::new("隣の客はよく柿食う客だ");
//! assert_eq!(s.len(), 11);
//! assert_eq!(s.substring(0, Some(5)).value(), "隣の客はよ");
//!
//! // Transcoding produces a new string under the target tag.
//! let sjis = s.encode_to("SJIS").unwrap();
//! assert_eq!(sjis.encoding().name(), "SJIS");
//! assert_eq!(sjis.encode_to("UTF-8").unwrap().value(), s.value());
//! ```
//!
//! Encoding labels are normalized, never rejected:
//!
//! ```
//! use charstr::Encoding;
//!
//! assert_eq!(Encoding::normalize("Shift_JIS"), Encoding::Sjis);
//! assert_eq!(Encoding::normalize("Big5").name(), "Big5");
//! ```

#![deny(missing_docs)]

/// Fixed-width buffer wrapper over one string.
pub mod buffer;
/// Encoding tags and label normalization.
pub mod encoding;
/// Error types.
pub mod error;
/// Stateless convenience entry points.
pub mod facade;
/// Character iterator types.
pub mod iter;
/// The fragment list produced by splitting.
pub mod list;
/// Regular-expression search over encoded strings.
pub mod pattern;
/// The `CharString` owned string type.
pub mod string;

pub use buffer::FixedTextBuffer;
pub use encoding::Encoding;
pub use error::{ConvertError, InvalidCodepointError, InvalidPatternError};
pub use iter::Chars;
pub use list::CharSequenceList;
pub use pattern::{MatchResult, PatternMatcher};
pub use string::{CharString, Scalar};
