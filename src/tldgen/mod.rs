//! Regeneration of the built-in TLD list.
//!
//! The list is merged from the IANA root zone list and the Public Suffix
//! List, normalized, deduplicated, sorted, and rendered as `src/tlds.rs`.
//! Run it with `cargo run --bin tldgen`, then rebuild.

#[cfg(feature = "tldgen")]
mod generator;
mod source;

#[cfg(feature = "tldgen")]
pub use generator::{
    accumulate, finalize, normalize, render, write_tlds, TldGenerator, TldSet,
    DEFAULT_FETCH_TIMEOUT, PUNYCODE_PREFIX,
};
pub use source::TldSource;
