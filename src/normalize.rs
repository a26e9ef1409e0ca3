//! Dot-segment removal for URL paths.
//!
//! The algorithm is modeled on `remove_dot_segments` from [RFC 3986 section
//! 5.2.4], adjusted for a tolerant client: `..` at the root is a no-op
//! (navigation can never climb above the root), empty segments from repeated
//! slashes are dropped, and a trailing slash on the input survives on the
//! output so directory URLs stay directory URLs.
//!
//! [RFC 3986 section 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4

use alloc::borrow::Cow;
use alloc::string::String;

use crate::components::UrlParts;
use crate::parser::str::replace_subslice;

/// Removes dot-segments from a bare path.
///
/// The output keeps a leading slash iff the input has one, so relative
/// paths stay relative. Segments are emitted verbatim; no percent decoding
/// happens here.
///
/// This function is idempotent.
///
/// # Examples
///
/// ```
/// use gmi_url::normalize::cleaned_path;
///
/// assert_eq!(cleaned_path("/a/./b/../c/"), "/a/c/");
/// assert_eq!(cleaned_path("/../x"), "/x");
/// assert_eq!(cleaned_path("a/../../b"), "b");
/// ```
#[must_use]
pub fn cleaned_path(path: &str) -> String {
    let mut clean = String::with_capacity(path.len());
    for seg in path.split('/') {
        if seg == ".." {
            // Back up one segment; never underflow past the root.
            match clean.rfind('/') {
                Some(pos) => clean.truncate(pos),
                None => clean.clear(),
            }
        } else if seg == "." {
            // Skip it.
        } else if !seg.is_empty() {
            // The cleaned path starts with a slash iff the original does.
            if !clean.is_empty() || path.starts_with('/') {
                clean.push('/');
            }
            clean.push_str(seg);
        }
    }
    if path.ends_with('/') && !clean.ends_with('/') {
        clean.push('/');
    }
    clean
}

/// Removes dot-segments from the path component of a full URL.
///
/// Returns the input borrowed when the path is already clean.
///
/// # Examples
///
/// ```
/// use gmi_url::normalize::clean_url_path;
///
/// assert_eq!(
///     clean_url_path("gemini://example.org/a/b/../c?q#f"),
///     "gemini://example.org/a/c?q#f"
/// );
/// ```
#[must_use]
pub fn clean_url_path(url: &str) -> Cow<'_, str> {
    let parts = UrlParts::parse(url);
    let clean = cleaned_path(parts.path);
    if clean == parts.path {
        return Cow::Borrowed(url);
    }
    Cow::Owned(replace_subslice(url, parts.path, &clean))
}
