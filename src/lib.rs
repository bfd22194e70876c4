//! linkgrep - extract web URLs and email addresses from text
//!
//! This library provides three precompiled matchers:
//! - Web URLs, with optional `http://`/`https://` scheme, port and path
//! - Email addresses
//! - Both at once, web URLs preferred when they start at the same position
//!
//! Hostnames are matched against the public TLD list baked in at build time,
//! IPv4 and IPv6 literals, or `localhost`. Labels may use non-ASCII letters
//! directly, so punycode is not needed.
//!
//! # Example
//!
//! ```rust
//! use linkgrep::{email, web_url};
//!
//! let text = "Visit https://example.com/path?q=1 or mail admin@example.org";
//!
//! let urls = web_url().find_all(text);
//! assert_eq!(urls[0], "https://example.com/path?q=1");
//!
//! let m = email().find(text).unwrap();
//! assert_eq!(m.as_str(), "admin@example.org");
//! assert_eq!(&text[m.range()], "admin@example.org");
//! ```
//!
//! # What is matched
//!
//! | Part | Example | Rule |
//! |------|---------|------|
//! | Scheme | `https://` | `http://` or `https://`, optional |
//! | Host | `sub.example.co.uk` | labels of at most 63 chars, then a known TLD |
//! | Host | `192.168.0.1`, `::1` | IPv4 or IPv6 literal, without brackets |
//! | Host | `localhost` | literal |
//! | Port | `:8080` | 1-5 digits |
//! | Path | `/a/b?c=d` | segments ending in a letter or digit |
//! | Email | `user.name+tag@host` | 1-256 chars of `[a-zA-Z0-9._%+-]`, `@`, host |
//!
//! # Regenerating the TLD list
//!
//! With the `tldgen` feature (on by default), `cargo run --bin tldgen`
//! rewrites `src/tlds.rs` from the IANA list and the Public Suffix List.

pub mod error;
pub mod matcher;
pub mod pattern;
pub mod tldgen;
pub mod tlds;
pub mod types;

// Re-export commonly used items
pub use error::{FetchErrorKind, LinkError, Result};
pub use matcher::{
    all, email, web_url, LinkMatcher, MatcherConfig, Matches, ALL, EMAIL, WEB_URL,
};
pub use pattern::Patterns;
pub use tlds::TLDS;
pub use types::{Match, MatcherKind};
