//! Percent encoding and decoding scoped to URL structure.
//!
//! These codecs are structure-preserving: the path variants only touch the
//! path span of a full URL, and reserved delimiter characters are excluded
//! from each pass so that decoding can never materialize a `/`, `?`, or `#`
//! that would be reinterpreted as structure.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::components::UrlParts;
use crate::parser::str::replace_subslice;

/// Bytes never decoded within a path span; they are structurally
/// significant and must stay escaped.
const PATH_DECODE_EXCLUDE: &[u8] = b"%?/#";

/// Bytes never escaped within a path span. Spaces are deliberately left
/// for the separate [`encode_spaces`] pass.
const PATH_ENCODE_EXCLUDE: &[u8] = b"%/ ";

/// Checks if the given byte matches the `unreserved` rule of RFC 3986
/// section 2.3.
#[inline]
#[must_use]
fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Returns the value of an ASCII hexadecimal digit.
#[must_use]
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Appends `%XX` for the given byte, uppercase hexadecimal.
fn push_pct_encoded(out: &mut String, b: u8) {
    /// Uppercase hexadecimal digits.
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    out.push('%');
    out.push(HEX[usize::from(b >> 4)] as char);
    out.push(HEX[usize::from(b & 0x0f)] as char);
}

/// Percent-decodes `s`, leaving `%XX` escapes alone when the decoded byte
/// is in `exclude`.
///
/// Malformed escapes pass through verbatim. Decoded bytes that do not form
/// valid UTF-8 are lossily replaced; this codec is best-effort by contract.
#[must_use]
pub(crate) fn percent_decode_exclude(s: &str, exclude: &[u8]) -> String {
    let bytes = s.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] == b'%' && pos + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[pos + 1]), hex_value(bytes[pos + 2])) {
                let decoded = (hi << 4) | lo;
                if !exclude.contains(&decoded) {
                    out.push(decoded);
                    pos += 3;
                    continue;
                }
            }
        }
        out.push(bytes[pos]);
        pos += 1;
    }
    match String::from_utf8(out) {
        Ok(decoded) => decoded,
        Err(invalid) => String::from_utf8_lossy(invalid.as_bytes()).into_owned(),
    }
}

/// Percent-encodes every byte of `s` that is neither `unreserved` nor in
/// `exclude`.
#[must_use]
pub(crate) fn percent_encode_exclude(s: &str, exclude: &[u8]) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if is_unreserved(b) || exclude.contains(&b) {
            out.push(b as char);
        } else {
            push_pct_encoded(&mut out, b);
        }
    }
    out
}

/// Percent-decodes the path component of a URL, in a structure-preserving
/// way.
///
/// Escapes decoding to `%`, `?`, `/`, or `#` are kept as-is. Everything
/// outside the path span is untouched. Returns the input borrowed when
/// nothing changes.
///
/// # Examples
///
/// ```
/// use gmi_url::percent_encoding::decode_url_path;
///
/// assert_eq!(
///     decode_url_path("gemini://h/a%20b/c%2Fd?e%20f"),
///     "gemini://h/a b/c%2Fd?e%20f"
/// );
/// ```
#[must_use]
pub fn decode_url_path(url: &str) -> Cow<'_, str> {
    let parts = UrlParts::parse(url);
    if parts.path.is_empty() {
        return Cow::Borrowed(url);
    }
    let decoded = percent_decode_exclude(parts.path, PATH_DECODE_EXCLUDE);
    if decoded == parts.path {
        return Cow::Borrowed(url);
    }
    Cow::Owned(replace_subslice(url, parts.path, &decoded))
}

/// Percent-encodes the path component of a URL.
///
/// Existing escapes (`%`), path separators, and spaces are left alone;
/// spaces get their own [`encode_spaces`] pass so that this operation can
/// be applied to partially encoded input without double-escaping.
///
/// # Examples
///
/// ```
/// use gmi_url::percent_encoding::encode_url_path;
///
/// assert_eq!(
///     encode_url_path("gemini://h/a b/c|d"),
///     "gemini://h/a b/c%7Cd"
/// );
/// ```
#[must_use]
pub fn encode_url_path(url: &str) -> Cow<'_, str> {
    let parts = UrlParts::parse(url);
    if parts.path.is_empty() {
        return Cow::Borrowed(url);
    }
    let encoded = percent_encode_exclude(parts.path, PATH_ENCODE_EXCLUDE);
    if encoded == parts.path {
        return Cow::Borrowed(url);
    }
    Cow::Owned(replace_subslice(url, parts.path, &encoded))
}

/// Replaces every literal space with `%20`.
///
/// Gemini request lines cannot carry raw spaces, so this is the final pass
/// before a URL goes on the wire.
///
/// # Examples
///
/// ```
/// use gmi_url::percent_encoding::encode_spaces;
///
/// assert_eq!(encode_spaces("gemini://h/a b c"), "gemini://h/a%20b%20c");
/// assert_eq!(encode_spaces("no-spaces"), "no-spaces");
/// ```
#[must_use]
pub fn encode_spaces(text: &str) -> Cow<'_, str> {
    if !text.contains(' ') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace(' ', "%20"))
}
