//! Tests for the CharString core type: codepoint-indexed queries, mutation
//! chaining, slicing and splitting.

use core::cmp::Ordering;

use charstr::{CharString, Scalar};

// =============================================================================
// Construction and queries
// =============================================================================

#[test]
fn test_new_defaults_to_utf8() {
    let s = CharString::new("a");
    assert_eq!(s.encoding().name(), "UTF-8");
    assert_eq!(s.value(), "a");
}

#[test]
fn test_unknown_encoding_is_preserved() {
    let s = CharString::with_encoding("a", "Windows-1252");
    assert_eq!(s.encoding().name(), "Windows-1252");
}

#[test]
fn test_length_counts_codepoints_not_bytes() {
    let s = CharString::new("あお");
    assert_eq!(s.len(), 2);
    assert_eq!(s.as_bytes().len(), 6);

    assert_eq!(CharString::new("").len(), 0);
    assert!(CharString::new("").is_empty());
    assert!(!s.is_empty());
}

#[test]
fn test_ord_returns_first_codepoint() {
    assert_eq!(CharString::new("あ").ord().unwrap(), 12354);
    assert_eq!(CharString::new("你好").ord().unwrap(), 20320);
    assert_eq!(CharString::new("a").ord().unwrap(), 97);
}

#[test]
fn test_ord_fails_on_empty_and_malformed() {
    let err = CharString::new("").ord().unwrap_err();
    assert!(err.is_empty_input());

    let bad = CharString::from_bytes(vec![0xFF, 0xFE], "UTF-8");
    let err = bad.ord().unwrap_err();
    assert!(!err.is_empty_input());
    assert_eq!(err.encoding(), "UTF-8");
}

#[test]
fn test_index_of() {
    assert_eq!(CharString::new("你好").index_of("嗎"), -1);
    assert_eq!(CharString::new("你好").index_of("好"), 1);
    // Index is in codepoints, not bytes.
    assert_eq!(CharString::new("あおうえ").index_of("うえ"), 2);
    assert_eq!(CharString::new("hello").index_of("hello"), 0);
}

#[test]
fn test_contains_starts_ends() {
    let s = CharString::new("隣の客はよく柿食う客だ");
    assert!(s.contains("柿"));
    assert!(!s.contains("餅"));
    assert!(s.starts_with("隣の"));
    assert!(s.ends_with("客だ"));
    assert!(!s.starts_with("客"));
}

#[test]
fn test_compare_and_equals() {
    let s = CharString::new("abc");
    assert_eq!(s.compare("abc"), Ordering::Equal);
    assert_eq!(s.compare("abd"), Ordering::Less);
    assert_eq!(s.compare("abb"), Ordering::Greater);
    assert!(s.equals("abc"));
    assert!(s.equals_to(&CharString::new("abc")));
    assert_eq!(s, "abc");
}

#[test]
fn test_clone_copies_content_and_encoding() {
    let original = CharString::with_encoding("あ", "SJIS");
    let copy = original.clone();
    assert_eq!(copy.encoding().name(), "SJIS");
    assert_eq!(copy.as_bytes(), original.as_bytes());
}

// =============================================================================
// Mutation
// =============================================================================

#[test]
fn test_set_and_clear_keep_encoding() {
    let mut s = CharString::with_encoding("あ", "SJIS");
    s.set("い");
    assert_eq!(s.value(), "い");
    assert_eq!(s.encoding().name(), "SJIS");

    s.clear();
    assert!(s.is_empty());
    assert_eq!(s.encoding().name(), "SJIS");
}

#[test]
fn test_append_prepend_chaining() {
    let mut s = CharString::new("客");
    s.prepend("隣の").append("はよく");
    assert_eq!(s.value(), "隣の客はよく");
}

#[test]
fn test_insert() {
    let mut s = CharString::new("隣の客");
    s.insert(3, "はよ");
    assert_eq!(s.value(), "隣の客はよ");

    // Insertion past the end appends.
    let mut s = CharString::new("ab");
    s.insert(100, "c");
    assert_eq!(s.value(), "abc");
}

#[test]
fn test_remove() {
    let mut s = CharString::new("隣の客はよ");
    s.remove(2, Some(1));
    assert_eq!(s.value(), "隣のはよ");

    // Omitted length removes to the end.
    let mut s = CharString::new("hello world");
    s.remove(5, None);
    assert_eq!(s.value(), "hello");
}

#[test]
fn test_replace_literal_all_occurrences() {
    let mut s = CharString::new("ababab");
    s.replace("ab", "x");
    assert_eq!(s.value(), "xxx");

    let mut s = CharString::new("よく柿食う");
    s.replace("柿", "餅");
    assert_eq!(s.value(), "よく餅食う");
}

#[test]
fn test_replace_regex() {
    let mut s = CharString::new("Foo123, Bar456");
    s.replace_regex(r"[0-9]+", "#").unwrap();
    assert_eq!(s.value(), "Foo#, Bar#");

    // Capture group references work.
    let mut s = CharString::new("Foo123");
    s.replace_regex(r"Foo([0-9]+)", "$1").unwrap();
    assert_eq!(s.value(), "123");

    assert!(CharString::new("x").replace_regex("(", "y").is_err());
}

#[test]
fn test_truncate_is_codepoint_safe() {
    let text = "隣の客はよく柿食う客だ";

    let mut s = CharString::new(text);
    s.truncate(0);
    assert_eq!(s.value(), "");
    assert_eq!(s.len(), 0);

    let mut s = CharString::new(text);
    s.truncate(5);
    assert_eq!(s.value(), "隣の客はよ");
    assert_eq!(s.len(), 5);

    // Past-the-end truncation is a no-op.
    let mut s = CharString::new(text);
    s.truncate(100);
    assert_eq!(s.len(), 11);
}

#[test]
fn test_trim_family() {
    let mut s = CharString::new("  hello\t\n");
    s.trim();
    assert_eq!(s.value(), "hello");

    let mut s = CharString::new("  hello  ");
    s.trim_start();
    assert_eq!(s.value(), "hello  ");

    let mut s = CharString::new("  hello  ");
    s.trim_end();
    assert_eq!(s.value(), "  hello");
}

#[test]
fn test_trim_with_explicit_set() {
    let mut s = CharString::new("xxhelloyy");
    s.trim_matches("xy");
    assert_eq!(s.value(), "hello");

    let mut s = CharString::new("--hello--");
    s.trim_start_matches("-");
    assert_eq!(s.value(), "hello--");

    let mut s = CharString::new("--hello--");
    s.trim_end_matches("-");
    assert_eq!(s.value(), "--hello");
}

#[test]
fn test_case_folding() {
    let mut s = CharString::new("Hello");
    s.to_lower();
    assert_eq!(s.value(), "hello");
    s.to_upper();
    assert_eq!(s.value(), "HELLO");

    // No case concept: identity.
    let mut s = CharString::new("こんにちは");
    s.to_upper();
    assert_eq!(s.value(), "こんにちは");
}

#[test]
fn test_concat_scalars() {
    let mut s = CharString::new("こんにちは");
    s.concat([Scalar::from(",")]);
    assert_eq!(s.value(), "こんにちは,");

    let mut s = CharString::new("こんにちは");
    s.concat([Scalar::from(","), Scalar::from(" World!")]);
    assert_eq!(s.value(), "こんにちは, World!");

    let mut s = CharString::new("こんにちは");
    s.concat([
        Scalar::from(":"),
        Scalar::from(-1),
        Scalar::from(":"),
        Scalar::from(0),
        Scalar::from(":"),
        Scalar::from(3.14),
    ]);
    assert_eq!(s.value(), "こんにちは:-1:0:3.14");

    let mut s = CharString::new("こんにちは");
    s.concat([
        Scalar::from(":"),
        Scalar::from(true),
        Scalar::from(":"),
        Scalar::from(false),
    ]);
    assert_eq!(s.value(), "こんにちは:true:false");

    // Nil is silently skipped, not an error.
    let mut s = CharString::new("こんにちは");
    s.concat([Scalar::Nil]);
    assert_eq!(s.value(), "こんにちは");
}

#[test]
fn test_concat_accepts_other_strings() {
    let other = CharString::new(", 你好!");
    let mut s = CharString::new("こんにちは");
    s.concat([Scalar::from(&other)]);
    assert_eq!(s.value(), "こんにちは, 你好!");
}

// =============================================================================
// Slicing
// =============================================================================

#[test]
fn test_substring() {
    let s = CharString::new("隣の客はよく柿食う客だ");
    assert_eq!(s.substring(0, Some(5)).value(), "隣の客はよ");
    assert_eq!(s.substring(0, Some(5)).len(), 5);
    assert_eq!(s.substring(6, None).value(), "柿食う客だ");
    // The source is untouched.
    assert_eq!(s.len(), 11);
}

#[test]
fn test_substring_negative_start() {
    let s = CharString::new("hello");
    assert_eq!(s.substring(-2, None).value(), "lo");
    assert_eq!(s.substring(-4, Some(2)).value(), "el");
    // |start| beyond the length clamps to the beginning.
    assert_eq!(s.substring(-100, None).value(), "hello");
}

#[test]
fn test_substring_out_of_range_is_empty() {
    let s = CharString::new("abc");
    assert_eq!(s.substring(10, None).value(), "");
    assert_eq!(s.substring(10, Some(5)).value(), "");
}

#[test]
fn test_substring_full_roundtrip() {
    let s = CharString::new("隣の客はよく柿食う客だ");
    let len = s.len();
    assert_eq!(s.substring(0, Some(len)).value(), s.value());
}

#[test]
fn test_split_empty_separator_yields_codepoints() {
    let list = CharString::new("あお").split("");
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0), Some("あ"));
    assert_eq!(list.get(1), Some("お"));
}

#[test]
fn test_split_literal() {
    let list = CharString::new("a,b,c").split(",");
    assert_eq!(list.values(), &["a", "b", "c"]);

    // Consecutive separators produce empty fragments.
    let list = CharString::new("a,,c").split(",");
    assert_eq!(list.values(), &["a", "", "c"]);

    // An absent separator yields the whole string.
    let list = CharString::new("abc").split(";");
    assert_eq!(list.values(), &["abc"]);
}

#[test]
fn test_split_join_roundtrip() {
    let s = CharString::new("隣の客はよく柿食う客だ");
    assert_eq!(s.split("").join("").value(), s.value());
}

// =============================================================================
// Iteration
// =============================================================================

#[test]
fn test_chars_yields_one_codepoint_at_a_time() {
    let s = CharString::new("あお");
    let chars: Vec<CharString> = s.chars().collect();
    assert_eq!(chars.len(), 2);
    assert_eq!(chars[0].value(), "あ");
    assert_eq!(chars[1].value(), "お");
    assert_eq!(chars[0].len(), 1);
}

#[test]
fn test_chars_empty_string() {
    assert_eq!(CharString::new("").chars().count(), 0);
}

#[test]
fn test_chars_is_restartable() {
    let s = CharString::new("abc");
    assert_eq!(s.chars().count(), 3);
    assert_eq!(s.chars().count(), 3);
}

#[test]
fn test_chars_preserves_encoding_tag() {
    let s = CharString::with_encoding("あお", "SJIS");
    for c in s.chars() {
        assert_eq!(c.encoding().name(), "SJIS");
        assert_eq!(c.len(), 1);
    }
}

#[test]
fn test_chars_snapshot_survives_mutation() {
    let mut s = CharString::new("abc");
    let mut iter = s.chars();
    s.clear();
    // The iterator still sees the content it was created from.
    assert_eq!(iter.next().unwrap().value(), "a");
    assert_eq!(iter.count(), 2);
}

#[test]
fn test_each() {
    let s = CharString::new("あお");
    let mut seen = Vec::new();
    s.each(|c| seen.push(c.value().into_owned()));
    assert_eq!(seen, ["あ", "お"]);
}
