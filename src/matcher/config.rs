use crate::error::{LinkError, Result};
use crate::tlds::TLDS;

/// Default compiled-program size limit: 32 MiB.
///
/// The bounded repetitions over the Unicode classes expand into a large
/// automaton.
pub const DEFAULT_SIZE_LIMIT: usize = 32 * (1 << 20);

/// Default lazy DFA cache size: 16 MiB.
pub const DEFAULT_DFA_SIZE_LIMIT: usize = 16 * (1 << 20);

/// Configuration for building a [`LinkMatcher`](super::LinkMatcher).
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// TLDs accepted after the last hostname label; `None` uses [`TLDS`]
    pub tlds: Option<Vec<String>>,
    pub size_limit: usize,
    pub dfa_size_limit: usize,
}

impl MatcherConfig {
    pub fn new() -> Self {
        Self {
            tlds: None,
            size_limit: DEFAULT_SIZE_LIMIT,
            dfa_size_limit: DEFAULT_DFA_SIZE_LIMIT,
        }
    }

    /// Use a custom TLD list instead of the built-in one.
    ///
    /// Entries are lowercased; blank entries are ignored.
    pub fn with_tlds<I, S>(mut self, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tlds = Some(
            tlds.into_iter()
                .map(|tld| tld.as_ref().trim().to_lowercase())
                .filter(|tld| !tld.is_empty())
                .collect(),
        );
        self
    }

    pub fn with_size_limit(mut self, limit: usize) -> Self {
        self.size_limit = limit;
        self
    }

    pub fn with_dfa_size_limit(mut self, limit: usize) -> Self {
        self.dfa_size_limit = limit;
        self
    }

    /// The TLD list in effect
    pub(crate) fn tld_list(&self) -> Result<Vec<&str>> {
        let tlds: Vec<&str> = match self.tlds {
            Some(ref custom) => custom.iter().map(String::as_str).collect(),
            None => TLDS.to_vec(),
        };

        if tlds.is_empty() {
            return Err(LinkError::ConfigError("TLD list is empty".to_string()));
        }
        Ok(tlds)
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_builtin_tlds() {
        let config = MatcherConfig::default();
        assert!(config.tlds.is_none());
        assert_eq!(config.tld_list().unwrap().len(), TLDS.len());
        assert_eq!(config.size_limit, DEFAULT_SIZE_LIMIT);
        assert_eq!(config.dfa_size_limit, DEFAULT_DFA_SIZE_LIMIT);
    }

    #[test]
    fn test_with_tlds_normalizes() {
        let config = MatcherConfig::new().with_tlds(["COM", " org ", ""]);
        assert_eq!(config.tld_list().unwrap(), vec!["com", "org"]);
    }

    #[test]
    fn test_empty_tld_list_is_config_error() {
        let config = MatcherConfig::new().with_tlds(Vec::<String>::new());
        assert!(matches!(config.tld_list(), Err(LinkError::ConfigError(_))));
    }

    #[test]
    fn test_builder_limits() {
        let config = MatcherConfig::new()
            .with_size_limit(1 << 20)
            .with_dfa_size_limit(1 << 10);
        assert_eq!(config.size_limit, 1 << 20);
        assert_eq!(config.dfa_size_limit, 1 << 10);
    }
}
