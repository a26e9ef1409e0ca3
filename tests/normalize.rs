//! Tests for path normalization.
#![cfg(feature = "alloc")]

use std::borrow::Cow;

use gmi_url::normalize::{clean_url_path, cleaned_path};

/// Path cleaning cases.
// [(input, output)]
const TEST_CASES: &[(&str, &str)] = &[
    ("/a/./b/../c/", "/a/c/"),
    ("/../x", "/x"),
    ("/a/b/c", "/a/b/c"),
    ("/a/b/..", "/a"),
    ("/a/b/../", "/a/"),
    ("/a/b/.", "/a/b"),
    ("/..", ""),
    ("/.", ""),
    ("/", "/"),
    ("", ""),
    (".", ""),
    ("..", ""),
    ("a/b/../c", "a/c"),
    ("a/../../b", "b"),
    ("/a//b", "/a/b"),
    ("a/", "a/"),
];

#[test]
fn cleaned_path_cases() {
    for (input, expected) in TEST_CASES {
        assert_eq!(cleaned_path(input), *expected, "input={input:?}");
    }
}

#[test]
fn cleaned_path_is_idempotent() {
    for (input, _) in TEST_CASES {
        let once = cleaned_path(input);
        assert_eq!(cleaned_path(&once), once, "input={input:?}");
    }
}

#[test]
fn url_path_cleaning_is_span_scoped() {
    // Dot segments in query and fragment are data, not structure.
    assert_eq!(
        clean_url_path("gemini://h/a/../b?x/../y#z/../w"),
        "gemini://h/b?x/../y#z/../w"
    );
}

#[test]
fn already_clean_url_is_borrowed() {
    assert!(matches!(
        clean_url_path("gemini://example.org/a/b/c"),
        Cow::Borrowed(_)
    ));
}

#[test]
fn relative_url_paths_are_cleaned_too() {
    assert_eq!(clean_url_path("a/./b"), "a/b");
}
