use std::fmt;
use std::ops::Range;

/// Which pattern a matcher is compiled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    /// Web URLs with optional scheme, port and path
    WebUrl,
    /// Email addresses
    Email,
    /// Web URLs or email addresses, web URLs preferred
    All,
}

impl MatcherKind {
    pub fn name(&self) -> &'static str {
        match self {
            MatcherKind::WebUrl => "web-url",
            MatcherKind::Email => "email",
            MatcherKind::All => "all",
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single match found in a text buffer.
///
/// Offsets are byte offsets into the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// The matched substring
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<'t> From<regex::Match<'t>> for Match<'t> {
    fn from(m: regex::Match<'t>) -> Self {
        Self {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        }
    }
}

impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
