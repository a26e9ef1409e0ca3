//! Tests for reference resolution.
#![cfg(feature = "alloc")]

use gmi_url::components::{extract_host, extract_scheme};
use gmi_url::resolve::{resolve, DEFAULT_PORT, DEFAULT_SCHEME};

/// Test cases for resolution against a Gemini base URL.
// [(base, [(input, output)])]
const TEST_CASES: &[(&str, &[(&str, &str)])] = &[
    (
        "gemini://example.org/a/b/c",
        &[
            // Merging onto the base's directory.
            ("d/e", "gemini://example.org/a/b/d/e"),
            ("d", "gemini://example.org/a/b/d"),
            ("./d", "gemini://example.org/a/b/d"),
            ("../d", "gemini://example.org/a/d"),
            ("../../d", "gemini://example.org/d"),
            // Cannot climb above the root.
            ("../../../../d", "gemini://example.org/d"),
            // Absolute path in the reference.
            ("/top", "gemini://example.org/top"),
            ("/./top", "gemini://example.org/top"),
            // Protocol-relative reference.
            ("//other.org/x", "gemini://other.org/x"),
            ("//other.org", "gemini://other.org/"),
            // Query and fragment attach to the merged path.
            ("d?q", "gemini://example.org/a/b/d?q"),
            ("d#f", "gemini://example.org/a/b/d#f"),
            ("d?q#f", "gemini://example.org/a/b/d?q#f"),
        ],
    ),
    (
        "gemini://example.org/a/b/",
        &[
            // Base is a directory; no segment is dropped.
            ("c", "gemini://example.org/a/b/c"),
            ("../c", "gemini://example.org/a/c"),
            ("c/", "gemini://example.org/a/b/c/"),
        ],
    ),
    (
        "gemini://example.org",
        &[
            // Empty base path.
            ("x", "gemini://example.org/x"),
            ("/x", "gemini://example.org/x"),
        ],
    ),
    (
        "gemini://example.org:1966/dir/",
        &[
            // Non-default port survives resolution.
            ("x", "gemini://example.org:1966/dir/x"),
            // A reference with its own authority replaces port and host.
            ("//other.org:1966/y", "gemini://other.org:1966/y"),
            // The default port is elided even when written explicitly.
            ("//other.org:1965/y", "gemini://other.org/y"),
        ],
    ),
];

#[test]
fn resolve_against_base() {
    for (base, cases) in TEST_CASES {
        for (reference, expected) in *cases {
            assert_eq!(
                resolve(base, reference),
                *expected,
                "base={base:?}, reference={reference:?}"
            );
        }
    }
}

#[test]
fn scheme_changing_resolution_is_detectable() {
    let base = "gemini://x/y";
    let result = resolve(base, "https://other/z");
    assert_eq!(extract_scheme(&result), Some("https"));
    assert_eq!(extract_host(&result), "other");
    assert_ne!(extract_scheme(&result), extract_scheme(base));
}

#[test]
fn opaque_references_are_untouched() {
    let base = "gemini://example.org/dir/";
    assert_eq!(resolve(base, "mailto:a@b.c"), "mailto:a@b.c");
    assert_eq!(
        resolve(base, "data:text/gemini;base64,IyBoaQ=="),
        "data:text/gemini;base64,IyBoaQ=="
    );
    assert_eq!(resolve(base, "about:blank"), "about:blank");
}

/// Documented quirk, not a bug: the resolver always appends the
/// *reference's* query, so an entirely empty reference (a same-document
/// reference) drops the query the base carried.
#[test]
fn empty_reference_drops_base_query() {
    assert_eq!(
        resolve("gemini://example.org/a?keep=no", ""),
        "gemini://example.org/a"
    );
    // A reference that carries its own query replaces the base's.
    assert_eq!(
        resolve("gemini://example.org/a?old", "?new"),
        "gemini://example.org/a?new"
    );
}

#[test]
fn fragment_only_reference_keeps_base_path() {
    assert_eq!(
        resolve("gemini://example.org/a/b", "#sec"),
        "gemini://example.org/a/b#sec"
    );
}

#[test]
fn default_scheme_and_port_constants() {
    assert_eq!(DEFAULT_SCHEME, "gemini");
    assert_eq!(DEFAULT_PORT, "1965");
    assert_eq!(
        resolve("gemini://example.org:1965/a/", "b"),
        "gemini://example.org/a/b"
    );
}

#[test]
fn idn_base_host_is_decoded_for_display() {
    assert_eq!(
        resolve("gemini://xn--mnchen-3ya.de/stadt/", "plan"),
        "gemini://münchen.de/stadt/plan"
    );
}

#[test]
fn result_path_is_always_rooted() {
    // Even a bare authority reference gains a path.
    assert_eq!(resolve("gemini://a/b", "//c"), "gemini://c/");
    assert_eq!(resolve("gemini://a/b", "gemini://c"), "gemini://c/");
}

#[test]
fn userinfo_in_reference_is_dropped() {
    assert_eq!(
        resolve("gemini://a/", "//user@other.org/x"),
        "gemini://other.org/x"
    );
}
