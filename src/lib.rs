//! Tolerant URL handling for [Gemini] clients.
//!
//! This crate turns arbitrary link text (absolute or relative, possibly
//! non-ASCII) into a canonical absolute URL a client can navigate to. It
//! provides zero-copy decomposition of URL references into component spans,
//! reference resolution against a base URL with Gemini's default-scheme and
//! default-port conventions, dot-segment path cleaning, a best-effort
//! punycode (ACE, `xn--`) host transcoder, and path-scoped percent codecs.
//!
//! [Gemini]: https://geminiprotocol.net/
//!
//! # Tolerance
//!
//! Unlike strict RFC 3986 parsers, nothing here returns an error: resolution
//! must always yield *some* usable URL for navigation. Malformed input
//! degrades to missing components rather than failing, and the punycode
//! transcoder falls back to emitting labels unchanged whenever a conversion
//! is not meaningful. Policy decisions that do fail (rejecting a
//! scheme-changing redirect, capping redirect chains) belong to the caller,
//! which can compare [`components::extract_scheme`] and
//! [`components::extract_host`] of the input and the output.
//!
//! # `std` and `alloc` support
//!
//! This crate supports `no_std` usage.
//!
//! * `alloc` feature:
//!     + Std library or `alloc` crate is required.
//!     + This feature enables operations which build owned strings, e.g.
//!       `resolve::resolve` and `normalize::clean_url_path`.
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + This automatically enables `alloc` feature.
//! * Without neither of them:
//!     + Only the borrowed-view decomposition in [`components`] is available.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use gmi_url::components::UrlParts;
//! use gmi_url::resolve::resolve;
//!
//! let base = "gemini://example.org/docs/spec";
//! assert_eq!(resolve(base, "../faq.gmi"), "gemini://example.org/faq.gmi");
//!
//! let parts = UrlParts::parse("gemini://example.org:1965/x?q#frag");
//! assert_eq!(parts.scheme, Some("gemini"));
//! assert_eq!(parts.host, "example.org");
//! assert_eq!(parts.port, "1965");
//! assert_eq!(parts.path, "/x");
//! assert_eq!(parts.query, Some("q"));
//! assert_eq!(parts.fragment, Some("frag"));
//! # }
//! ```
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod components;
#[cfg(feature = "alloc")]
pub mod manipulation;
#[cfg(feature = "alloc")]
pub mod normalize;
pub(crate) mod parser;
#[cfg(feature = "alloc")]
pub mod percent_encoding;
#[cfg(feature = "alloc")]
pub mod punycode;
#[cfg(feature = "alloc")]
pub mod resolve;
