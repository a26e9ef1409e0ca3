//! Byte-search helpers for splitting URL strings.
//!
//! All functions here operate on raw `&str` values. Splitting always happens
//! at ASCII byte boundaries, so the resulting substrings are guaranteed to
//! remain valid UTF-8.

use memchr::{memchr, memchr2, memchr3};
#[cfg(feature = "alloc")]
use memchr::memrchr;

/// Splits the string at the first occurrence of the given character,
/// consuming the character itself.
///
/// Returns `(before, after)`, neither of which contains the matched
/// character.
///
/// # Precondition
///
/// The byte to find must be an ASCII character.
#[must_use]
pub(crate) fn find_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    debug_assert!(needle.is_ascii());
    memchr(needle, s.as_bytes()).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the first occurrence of either given character.
///
/// The matched character is retained at the head of the second substring.
///
/// # Precondition
///
/// The bytes to find must be ASCII characters.
#[must_use]
pub(crate) fn find_split2(s: &str, needle1: u8, needle2: u8) -> Option<(&str, &str)> {
    debug_assert!(needle1.is_ascii() && needle2.is_ascii());
    memchr2(needle1, needle2, s.as_bytes()).map(|pos| (&s[..pos], &s[pos..]))
}

/// Splits the string at the first occurrence of any given character.
///
/// The matched character is retained at the head of the second substring.
///
/// # Precondition
///
/// The bytes to find must be ASCII characters.
#[must_use]
pub(crate) fn find_split3(s: &str, needle1: u8, needle2: u8, needle3: u8) -> Option<(&str, &str)> {
    debug_assert!(needle1.is_ascii() && needle2.is_ascii() && needle3.is_ascii());
    memchr3(needle1, needle2, needle3, s.as_bytes()).map(|pos| (&s[..pos], &s[pos..]))
}

/// Splits the string at the first occurrence of any of the four given
/// characters, consuming the matched character.
///
/// Returns `(before, matched_byte, after)`.
///
/// # Precondition
///
/// The bytes to find must be ASCII characters.
#[must_use]
pub(crate) fn find_split4_hole(
    s: &str,
    needle1: u8,
    needle2: u8,
    needle3: u8,
    needle4: u8,
) -> Option<(&str, u8, &str)> {
    debug_assert!(needle1.is_ascii() && needle2.is_ascii() && needle3.is_ascii());
    debug_assert!(needle4.is_ascii());
    let bytes = s.as_bytes();
    let pos = match (memchr3(needle1, needle2, needle3, bytes), memchr(needle4, bytes)) {
        (Some(pos3), Some(pos1)) => pos3.min(pos1),
        (pos3, pos1) => pos3.or(pos1)?,
    };
    Some((&s[..pos], bytes[pos], &s[(pos + 1)..]))
}

/// Returns the position of the first occurrence of the given character.
///
/// # Precondition
///
/// The byte to find must be an ASCII character.
#[inline]
#[must_use]
pub(crate) fn find(s: &str, needle: u8) -> Option<usize> {
    debug_assert!(needle.is_ascii());
    memchr(needle, s.as_bytes())
}

/// Returns the position of the last occurrence of the given character.
///
/// # Precondition
///
/// The byte to find must be an ASCII character.
#[cfg(feature = "alloc")]
#[inline]
#[must_use]
pub(crate) fn rfind(s: &str, needle: u8) -> Option<usize> {
    debug_assert!(needle.is_ascii());
    memrchr(needle, s.as_bytes())
}

/// Builds a copy of `whole` with the subslice `span` replaced by
/// `replacement`.
///
/// # Precondition
///
/// `span` must be a subslice of `whole`.
#[cfg(feature = "alloc")]
#[must_use]
pub(crate) fn replace_subslice(whole: &str, span: &str, replacement: &str) -> alloc::string::String {
    let start = subslice_offset(whole, span);
    let mut out = alloc::string::String::with_capacity(whole.len() - span.len() + replacement.len());
    out.push_str(&whole[..start]);
    out.push_str(replacement);
    out.push_str(&whole[(start + span.len())..]);
    out
}

/// Returns the byte offset of `part` inside `whole`.
///
/// # Precondition
///
/// `part` must be a subslice of `whole`, e.g. a component span returned by
/// the decomposer for the source string `whole`.
#[cfg(feature = "alloc")]
#[inline]
#[must_use]
pub(crate) fn subslice_offset(whole: &str, part: &str) -> usize {
    let offset = (part.as_ptr() as usize).wrapping_sub(whole.as_ptr() as usize);
    debug_assert!(offset <= whole.len() && offset + part.len() <= whole.len());
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_search() {
        assert_eq!(find("a#b#c", b'#'), Some(1));
        assert_eq!(find("abc", b'#'), None);
    }

    #[test]
    fn split_hole_consumes_needle() {
        assert_eq!(find_split_hole("foo:bar", b':'), Some(("foo", "bar")));
        assert_eq!(find_split_hole("foobar", b':'), None);
        assert_eq!(find_split_hole(":", b':'), Some(("", "")));
    }

    #[test]
    fn split_keeps_needle() {
        assert_eq!(find_split2("a?b#c", b'?', b'#'), Some(("a", "?b#c")));
        assert_eq!(find_split3("ab/cd?e", b'/', b'?', b'#'), Some(("ab", "/cd?e")));
        assert_eq!(find_split3("abcd", b'/', b'?', b'#'), None);
    }

    #[test]
    fn split4_hole_finds_earliest() {
        assert_eq!(
            find_split4_hole("gemini://x", b':', b'/', b'?', b'#'),
            Some(("gemini", b':', "//x"))
        );
        assert_eq!(
            find_split4_hole("a/b:c", b':', b'/', b'?', b'#'),
            Some(("a", b'/', "b:c"))
        );
        assert_eq!(
            find_split4_hole("a#b", b':', b'/', b'?', b'#'),
            Some(("a", b'#', "b"))
        );
        assert_eq!(find_split4_hole("plain", b':', b'/', b'?', b'#'), None);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn subslice_offset_of_component() {
        let whole = "gemini://example.org/x";
        let part = &whole[9..20];
        assert_eq!(subslice_offset(whole, part), 9);
    }
}
