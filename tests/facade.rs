//! Tests for the one-shot convenience functions.

use core::cmp::Ordering;

use charstr::{facade, Scalar};

#[test]
fn test_queries() {
    assert_eq!(facade::length("あお"), 2);
    assert!(facade::equals("客", "客"));
    assert!(!facade::equals("客", "柿"));
    assert_eq!(facade::compare("a", "b"), Ordering::Less);
    assert_eq!(facade::index_of("你好", "嗎"), -1);
    assert_eq!(facade::index_of("你好", "好"), 1);
    assert!(facade::contains("隣の客", "の"));
    assert!(facade::starts_with("隣の客", "隣"));
    assert!(facade::ends_with("隣の客", "客"));
}

#[test]
fn test_one_shot_transforms() {
    assert_eq!(facade::substring("隣の客はよ", 1, Some(2)).value(), "の客");
    assert_eq!(facade::remove("hello world", 5, None).value(), "hello");
    assert_eq!(facade::insert("ac", 1, "b").value(), "abc");
    assert_eq!(facade::to_lower("HeLLo").value(), "hello");
    assert_eq!(facade::to_upper("HeLLo").value(), "HELLO");
    assert_eq!(facade::trim("  x  ").value(), "x");
    assert_eq!(facade::trim_start("  x  ").value(), "x  ");
    assert_eq!(facade::trim_end("  x  ").value(), "  x");
    assert_eq!(facade::replace("aba", "a", "c").value(), "cbc");
    assert_eq!(
        facade::replace_regex("Foo123", r"[0-9]+", "#").unwrap().value(),
        "Foo#"
    );
    assert!(facade::replace_regex("x", "(", "y").is_err());
}

#[test]
fn test_split_join_concat() {
    assert_eq!(facade::split("a,b", ",").values(), &["a", "b"]);
    assert_eq!(facade::join("-", &["a", "b", "c"]).value(), "a-b-c");
    assert_eq!(
        facade::concat("x", [Scalar::from(1), Scalar::from(true)]).value(),
        "x1true"
    );
}

#[test]
fn test_each_and_shorthand() {
    assert_eq!(facade::s("あ").ord().unwrap(), 12354);

    let mut count = 0;
    facade::each("あお", |_| count += 1);
    assert_eq!(count, 2);
}
