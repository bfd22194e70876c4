mod config;

pub use config::{MatcherConfig, DEFAULT_DFA_SIZE_LIMIT, DEFAULT_SIZE_LIMIT};

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::Result;
use crate::pattern::Patterns;
use crate::types::{Match, MatcherKind};

/// Matches web URLs against the built-in TLD list
pub static WEB_URL: Lazy<LinkMatcher> = Lazy::new(|| {
    LinkMatcher::new(MatcherKind::WebUrl).expect("WEB_URL: built-in pattern is invalid")
});

/// Matches email addresses against the built-in TLD list
pub static EMAIL: Lazy<LinkMatcher> = Lazy::new(|| {
    LinkMatcher::new(MatcherKind::Email).expect("EMAIL: built-in pattern is invalid")
});

/// Matches web URLs or email addresses against the built-in TLD list
pub static ALL: Lazy<LinkMatcher> =
    Lazy::new(|| LinkMatcher::new(MatcherKind::All).expect("ALL: built-in pattern is invalid"));

/// The shared web URL matcher
pub fn web_url() -> &'static LinkMatcher {
    &WEB_URL
}

/// The shared email matcher
pub fn email() -> &'static LinkMatcher {
    &EMAIL
}

/// The shared combined matcher
pub fn all() -> &'static LinkMatcher {
    &ALL
}

/// A compiled URL/email matcher.
///
/// Immutable after construction; searching never fails and keeps no state
/// between calls, so one instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct LinkMatcher {
    kind: MatcherKind,
    regex: Regex,
}

impl LinkMatcher {
    /// Compile a matcher of the given kind with the default configuration
    pub fn new(kind: MatcherKind) -> Result<Self> {
        Self::with_config(kind, &MatcherConfig::default())
    }

    /// Compile a matcher of the given kind with an explicit configuration
    pub fn with_config(kind: MatcherKind, config: &MatcherConfig) -> Result<Self> {
        let tlds = config.tld_list()?;
        let patterns = Patterns::new(&tlds);
        let pattern = patterns.get(kind);

        let regex = RegexBuilder::new(pattern)
            .size_limit(config.size_limit)
            .dfa_size_limit(config.dfa_size_limit)
            .build()?;

        debug!(
            kind = %kind,
            tlds = tlds.len(),
            pattern_len = pattern.len(),
            "compiled link matcher"
        );

        Ok(Self { kind, regex })
    }

    pub fn kind(&self) -> MatcherKind {
        self.kind
    }

    /// The full pattern source
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Leftmost-first match in `text`, if any
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.regex.find(text).map(Match::from)
    }

    /// Lazily iterate over all non-overlapping matches, left to right
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        Matches {
            inner: self.regex.find_iter(text),
        }
    }

    /// All matched substrings, left to right
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Iterator over the matches of a [`LinkMatcher`] in a text buffer.
#[derive(Debug)]
pub struct Matches<'r, 't> {
    inner: regex::Matches<'r, 't>,
}

impl<'r, 't> Iterator for Matches<'r, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Match::from)
    }
}
