//! Whole-URL string helpers: default-port stripping, fragment stripping,
//! and local-path-to-URL construction.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::components::UrlParts;
use crate::normalize::cleaned_path;
use crate::parser::str::{find, subslice_offset};
use crate::percent_encoding::percent_encode_exclude;
use crate::resolve::{DEFAULT_PORT, DEFAULT_SCHEME};

/// Characters kept verbatim when a local filesystem path becomes a URL
/// path.
const FILE_PATH_ENCODE_EXCLUDE: &[u8] = b"/:";

/// Removes the port from a URL when it is the default Gemini port on a
/// Gemini URL.
///
/// Any other scheme/port combination is left untouched (and borrowed).
///
/// # Examples
///
/// ```
/// use gmi_url::manipulation::strip_default_port;
///
/// assert_eq!(
///     strip_default_port("gemini://example.org:1965/x"),
///     "gemini://example.org/x"
/// );
/// assert_eq!(
///     strip_default_port("gemini://example.org:1966/x"),
///     "gemini://example.org:1966/x"
/// );
/// assert_eq!(
///     strip_default_port("titan://example.org:1965/x"),
///     "titan://example.org:1965/x"
/// );
/// ```
#[must_use]
pub fn strip_default_port(url: &str) -> Cow<'_, str> {
    let parts = UrlParts::parse(url);
    let is_default = parts
        .scheme
        .map_or(false, |scheme| scheme.eq_ignore_ascii_case(DEFAULT_SCHEME))
        && parts.port == DEFAULT_PORT;
    if !is_default {
        return Cow::Borrowed(url);
    }
    // The port span is always preceded by a colon.
    let start = subslice_offset(url, parts.port);
    let mut out = String::with_capacity(url.len() - parts.port.len() - 1);
    out.push_str(&url[..(start - 1)]);
    out.push_str(&url[(start + parts.port.len())..]);
    Cow::Owned(out)
}

/// Returns the URL up to, and excluding, its first `#`.
///
/// A URL without a fragment is returned whole. This is a plain subslice;
/// nothing is copied.
///
/// # Examples
///
/// ```
/// use gmi_url::manipulation::fragment_stripped;
///
/// assert_eq!(fragment_stripped("gemini://h/p#frag"), "gemini://h/p");
/// assert_eq!(fragment_stripped("gemini://h/p"), "gemini://h/p");
/// ```
#[inline]
#[must_use]
pub fn fragment_stripped(url: &str) -> &str {
    match find(url, b'#') {
        Some(pos) => &url[..pos],
        None => url,
    }
}

/// Builds a `file://` URL from a local filesystem path.
///
/// Directory separators are normalized to `/` (Windows backslashes
/// included), dot-segments and repeated separators are collapsed, and
/// everything except `/` and `:` is percent-encoded. On Windows an extra
/// leading slash makes it three slashes before the drive letter.
///
/// # Examples
///
/// ```
/// use gmi_url::manipulation::make_file_url;
///
/// # #[cfg(not(windows))]
/// assert_eq!(make_file_url("/tmp/some file.gmi"), "file:///tmp/some%20file.gmi");
/// ```
#[must_use]
pub fn make_file_url(local_path: &str) -> String {
    let path = cleaned_path(&local_path.replace('\\', "/"));
    let encoded = percent_encode_exclude(&path, FILE_PATH_ENCODE_EXCLUDE);
    let mut url = String::with_capacity(encoded.len() + 8);
    url.push_str("file://");
    if cfg!(windows) {
        url.push('/');
    }
    url.push_str(&encoded);
    url
}
