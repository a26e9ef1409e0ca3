//! Best-effort punycode (ACE) transcoding for hostnames.
//!
//! Internationalized domain labels travel on the wire in their
//! ASCII-compatible encoding (`xn--` plus the [RFC 3492] punycode form) and
//! are shown to people in Unicode. Both directions here are per-label and
//! infallible at the host level: a label that cannot be converted is passed
//! through unchanged. This is deliberately not a conformance-checked IDNA
//! implementation; it is the fallback-safe codec a navigating client needs.
//!
//! [RFC 3492]: https://datatracker.ietf.org/doc/html/rfc3492

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::components::UrlParts;
use crate::parser::str::replace_subslice;

/// ACE prefix marking a punycode-encoded label.
const ACE_PREFIX: &str = "xn--";

// Parameter values from RFC 3492 section 5.
/// Digit base.
const BASE: u32 = 36;
/// Minimum threshold.
const TMIN: u32 = 1;
/// Maximum threshold.
const TMAX: u32 = 26;
/// Bias adaptation skew.
const SKEW: u32 = 38;
/// First-time delta damping.
const DAMP: u32 = 700;
/// Initial bias.
const INITIAL_BIAS: u32 = 72;
/// Initial code point (first non-basic code point).
const INITIAL_N: u32 = 128;

/// Bias adaptation function (RFC 3492 section 6.1).
#[must_use]
fn adapt(delta: u32, num_points: u32, first_time: bool) -> u32 {
    let mut delta = if first_time { delta / DAMP } else { delta / 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - TMIN) * TMAX) / 2 {
        delta /= BASE - TMIN;
        k += BASE;
    }
    k + ((BASE - TMIN + 1) * delta) / (delta + SKEW)
}

/// Clamped threshold for position `k` (RFC 3492 section 6.2).
#[must_use]
fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        TMIN
    } else if k >= bias + TMAX {
        TMAX
    } else {
        k - bias
    }
}

/// Encodes a digit value `0..36` as a basic code point (`a-z0-9`).
#[must_use]
fn encode_digit(d: u32) -> char {
    debug_assert!(d < BASE);
    if d < 26 {
        (d as u8 + b'a') as char
    } else {
        (d as u8 - 26 + b'0') as char
    }
}

/// Decodes a basic code point to its digit value.
#[must_use]
fn decode_digit(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        '0'..='9' => Some(c as u32 - '0' as u32 + 26),
        _ => None,
    }
}

/// Encodes one Unicode label into its punycode form (without the ACE
/// prefix).
///
/// Basic code points are copied verbatim and the `-` delimiter is emitted
/// whenever any exist, so a pure-ASCII label encodes to itself plus a
/// trailing delimiter. Returns `None` on arithmetic overflow; callers fall
/// back to the original label.
#[must_use]
pub(crate) fn encode_label(input: &str) -> Option<String> {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii() {
            output.push(c);
        }
    }
    let basic_len = output.len() as u32;
    let mut handled = basic_len;
    if basic_len > 0 {
        output.push('-');
    }

    let input_chars: Vec<u32> = input.chars().map(u32::from).collect();
    let input_len = input_chars.len() as u32;

    let mut n = INITIAL_N;
    let mut delta = 0_u32;
    let mut bias = INITIAL_BIAS;
    while handled < input_len {
        let m = input_chars.iter().copied().filter(|&c| c >= n).min()?;
        delta = delta.checked_add((m - n).checked_mul(handled + 1)?)?;
        n = m;
        for &c in &input_chars {
            if c < n {
                delta = delta.checked_add(1)?;
            } else if c == n {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(encode_digit(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(encode_digit(q));
                bias = adapt(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }
        delta = delta.checked_add(1)?;
        n = n.checked_add(1)?;
    }
    Some(output)
}

/// Decodes one punycode label (without the ACE prefix) back to Unicode.
///
/// Returns `None` on invalid digits, overflow, or a resulting scalar value
/// that is not a character; callers fall back to the original label.
#[must_use]
pub(crate) fn decode_label(input: &str) -> Option<String> {
    let (basic, encoded) = match input.rfind('-') {
        Some(pos) => (&input[..pos], &input[(pos + 1)..]),
        None => ("", input),
    };
    let mut output: Vec<char> = basic.chars().collect();

    let mut n = INITIAL_N;
    let mut i = 0_u32;
    let mut bias = INITIAL_BIAS;
    let mut chars = encoded.chars().peekable();
    while chars.peek().is_some() {
        let old_i = i;
        let mut w = 1_u32;
        let mut k = BASE;
        loop {
            let digit = decode_digit(chars.next()?)?;
            i = i.checked_add(digit.checked_mul(w)?)?;
            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            w = w.checked_mul(BASE - t)?;
            k += BASE;
        }
        let out_len = output.len() as u32 + 1;
        bias = adapt(i - old_i, out_len, old_i == 0);
        n = n.checked_add(i / out_len)?;
        i %= out_len;
        output.insert(i as usize, char::from_u32(n)?);
        i += 1;
    }
    Some(output.into_iter().collect())
}

/// Returns the label body following an ACE prefix, if the label has one.
///
/// Prefix matching is ASCII case-insensitive.
#[must_use]
fn ace_suffix(label: &str) -> Option<&str> {
    if label.len() >= ACE_PREFIX.len()
        && label.as_bytes()[..ACE_PREFIX.len()].eq_ignore_ascii_case(ACE_PREFIX.as_bytes())
    {
        Some(&label[ACE_PREFIX.len()..])
    } else {
        None
    }
}

/// Whether an encoded label merely appends the delimiter to a pure-ASCII
/// label, i.e. the encoding changed nothing of substance.
#[must_use]
fn is_identity_encoding(encoded: &str, label: &str) -> bool {
    encoded.ends_with('-')
        && encoded.len() == label.len() + 1
        && encoded.as_bytes()[..label.len()] == *label.as_bytes()
}

/// Decodes `xn--` labels of a hostname to Unicode, best-effort.
///
/// Labels that do not carry the ACE prefix, or whose decode fails or comes
/// out empty, are emitted unchanged. Dot separators are never altered.
///
/// # Examples
///
/// ```
/// use gmi_url::punycode::decode_host;
///
/// assert_eq!(decode_host("xn--bcher-kva.example.org"), "bücher.example.org");
/// assert_eq!(decode_host("plain.example.org"), "plain.example.org");
/// // A broken ACE label falls back to itself.
/// assert_eq!(decode_host("xn--.example.org"), "xn--.example.org");
/// ```
#[must_use]
pub fn decode_host(host: &str) -> String {
    let mut result = String::with_capacity(host.len());
    for (index, label) in host.split('.').enumerate() {
        if index > 0 {
            result.push('.');
        }
        let decoded = ace_suffix(label).and_then(decode_label);
        match decoded {
            Some(decoded) if !decoded.is_empty() => result.push_str(&decoded),
            _ => result.push_str(label),
        }
    }
    result
}

/// Encodes the non-ASCII labels of a hostname to their ACE form.
///
/// Pure-ASCII labels are left untouched (the encoder marking them as
/// identity-equivalent), so already-encoded hosts pass through unchanged.
///
/// # Examples
///
/// ```
/// use gmi_url::punycode::encode_host;
///
/// assert_eq!(encode_host("bücher.example.org"), "xn--bcher-kva.example.org");
/// assert_eq!(encode_host("plain.example.org"), "plain.example.org");
/// ```
#[must_use]
pub fn encode_host(host: &str) -> String {
    let mut result = String::with_capacity(host.len());
    for (index, label) in host.split('.').enumerate() {
        if index > 0 {
            result.push('.');
        }
        match encode_label(label) {
            Some(encoded) if !encoded.is_empty() && !is_identity_encoding(&encoded, label) => {
                result.push_str(ACE_PREFIX);
                result.push_str(&encoded);
            }
            _ => result.push_str(label),
        }
    }
    result
}

/// Rewrites the host of an absolute URL to its ACE form, leaving the rest
/// of the URL untouched.
///
/// This is the form a client puts on the wire. Returns the input borrowed
/// when there is no host or nothing changes.
///
/// # Examples
///
/// ```
/// use gmi_url::punycode::encode_url_host;
///
/// assert_eq!(
///     encode_url_host("gemini://bücher.example.org/a?q"),
///     "gemini://xn--bcher-kva.example.org/a?q"
/// );
/// ```
#[must_use]
pub fn encode_url_host(url: &str) -> Cow<'_, str> {
    let parts = UrlParts::parse(url);
    if parts.host.is_empty() {
        return Cow::Borrowed(url);
    }
    let encoded = encode_host(parts.host);
    if encoded == parts.host {
        return Cow::Borrowed(url);
    }
    Cow::Owned(replace_subslice(url, parts.host, &encoded))
}
