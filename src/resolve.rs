//! Reference resolution: base URL + reference (possibly relative) into one
//! normalized absolute URL.
//!
//! The algorithm follows the reference-resolution semantics of [RFC 3986
//! section 5.2] with the protocol conventions of a Gemini client layered on
//! top: a missing scheme defaults to `gemini`, the well-known port `1965`
//! is elided, the host is shown in its Unicode form, and a handful of
//! opaque schemes bypass resolution entirely. Resolution never fails;
//! whatever the inputs, the result is a navigable URL string.
//!
//! Callers that enforce redirect policy (same-scheme redirects, redirect
//! caps) compare components of the result against the pre-redirect URL via
//! [`crate::components::extract_scheme`] and
//! [`crate::components::extract_host`]; no policy lives here.
//!
//! [RFC 3986 section 5.2]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2

use alloc::borrow::Cow;
use alloc::string::{String, ToString};

use unicode_normalization::UnicodeNormalization;

use crate::components::UrlParts;
use crate::normalize::clean_url_path;
use crate::parser::str::rfind;
use crate::percent_encoding::percent_decode_exclude;
use crate::punycode::decode_host;

/// The scheme assumed when neither the reference nor the base supplies one.
pub const DEFAULT_SCHEME: &str = "gemini";

/// The well-known port elided from `gemini` URLs.
pub const DEFAULT_PORT: &str = "1965";

/// Schemes whose bodies are not path-structured. References carrying one
/// of these must be passed through unparsed; merging or normalizing them
/// would corrupt their contents.
const OPAQUE_SCHEMES: &[&str] = &["data", "about", "mailto"];

/// Checks if the given scheme is opaque, ASCII case-insensitively.
#[must_use]
fn is_opaque_scheme(scheme: &str) -> bool {
    OPAQUE_SCHEMES
        .iter()
        .any(|opaque| scheme.eq_ignore_ascii_case(opaque))
}

/// `true` when the path begins with `/` once fully percent-decoded.
///
/// The decoded form is used for this test only; the path itself is carried
/// over verbatim.
#[must_use]
fn is_absolute_path(path: &str) -> bool {
    percent_decode_exclude(path, &[]).starts_with('/')
}

/// Returns the directory part of a path: everything up to and excluding
/// the last `/`, or the whole path when it contains none.
#[must_use]
fn dir_path(path: &str) -> &str {
    match rfind(path, b'/') {
        Some(pos) => &path[..pos],
        None => path,
    }
}

/// Resolves `reference` against the absolute URL `base`, producing a
/// normalized absolute URL.
///
/// The result always has a scheme and (outside the opaque schemes) an
/// authority, a dot-segment-free path, and no redundant default port. The
/// host appears in its Unicode (punycode-decoded) form. This function has
/// no error outcome: malformed inputs degrade to whatever components can
/// be salvaged.
///
/// # Examples
///
/// ```
/// use gmi_url::resolve::resolve;
///
/// let base = "gemini://example.org/a/b/c";
/// assert_eq!(resolve(base, "d/e"), "gemini://example.org/a/b/d/e");
/// assert_eq!(resolve(base, "/top"), "gemini://example.org/top");
/// assert_eq!(resolve(base, "//other.org/x"), "gemini://other.org/x");
/// assert_eq!(resolve("gemini://example.org/a/b/", "../c"), "gemini://example.org/a/c");
/// ```
///
/// A reference with its own scheme wins outright; callers detect the
/// scheme change by comparing components:
///
/// ```
/// use gmi_url::components::extract_scheme;
/// use gmi_url::resolve::resolve;
///
/// let result = resolve("gemini://x/y", "https://other/z");
/// assert_eq!(result, "https://other/z");
/// assert_ne!(extract_scheme(&result), extract_scheme("gemini://x/y"));
/// ```
#[must_use]
pub fn resolve(base: &str, reference: &str) -> String {
    let orig = UrlParts::parse(base);
    let rel = UrlParts::parse(reference);
    if rel.scheme.map_or(false, is_opaque_scheme) {
        // The contents should be left unparsed.
        return reference.to_string();
    }
    let is_relative = rel.host.is_empty();
    let scheme = match (rel.scheme, orig.scheme) {
        (Some(scheme), _) => scheme,
        (None, Some(scheme)) if is_relative => scheme,
        _ => DEFAULT_SCHEME,
    };

    let mut absolute = String::with_capacity(base.len() + reference.len());
    absolute.push_str(scheme);
    absolute.push_str("://");
    // Authority.
    let sel = if rel.host.is_empty() { &orig } else { &rel };
    absolute.push_str(&decode_host(sel.host));
    // The default Gemini port is removed as redundant; normalization.
    if !sel.port.is_empty()
        && !(scheme.eq_ignore_ascii_case(DEFAULT_SCHEME) && sel.port == DEFAULT_PORT)
    {
        absolute.push(':');
        absolute.push_str(sel.port);
    }
    // Path.
    if rel.scheme.is_some() || !rel.host.is_empty() || is_absolute_path(rel.path) {
        if !rel.path.starts_with('/') {
            absolute.push('/');
        }
        absolute.push_str(rel.path);
    } else if !rel.path.is_empty() {
        if !orig.path.ends_with('/') {
            // Referencing a file: merge onto the base's directory.
            absolute.push_str(dir_path(orig.path));
        } else {
            // Referencing a directory.
            absolute.push_str(orig.path);
        }
        if !absolute.ends_with('/') {
            absolute.push('/');
        }
        absolute.push_str(rel.path);
    } else {
        // The reference supplies no path; the base's path is kept.
        absolute.push_str(orig.path);
    }
    // The reference's query and fragment are appended whether or not they
    // exist. An entirely empty reference therefore drops the base's query;
    // same-document references are treated as path-only.
    if let Some(query) = rel.query {
        absolute.push('?');
        absolute.push_str(query);
    }
    if let Some(fragment) = rel.fragment {
        absolute.push('#');
        absolute.push_str(fragment);
    }

    let absolute: String = absolute.nfc().collect();
    match clean_url_path(&absolute) {
        Cow::Borrowed(_) => absolute,
        Cow::Owned(cleaned) => cleaned,
    }
}
