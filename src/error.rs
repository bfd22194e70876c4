use thiserror::Error;

use crate::tldgen::TldSource;

/// Classifies TLD fetch errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Connection, DNS, TLS or timeout failure
    Transport,
    /// Server answered with a non-success HTTP status
    Status,
    /// Response body could not be read as UTF-8 lines
    Read,
}

/// linkgrep error types
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Pattern construction error: {0}")]
    Construction(#[from] regex::Error),

    #[error("Fetch error ({origin}): {message}")]
    Fetch {
        origin: TldSource,
        kind: FetchErrorKind,
        message: String,
    },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LinkError {
    #[cfg_attr(not(feature = "tldgen"), allow(dead_code))]
    pub(crate) fn fetch(
        origin: TldSource,
        kind: FetchErrorKind,
        message: impl Into<String>,
    ) -> Self {
        LinkError::Fetch {
            origin,
            kind,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_kind_is_matchable() {
        let err = LinkError::fetch(TldSource::Iana, FetchErrorKind::Status, "HTTP 503");
        match &err {
            LinkError::Fetch { origin, kind, .. } => {
                assert_eq!(*origin, TldSource::Iana);
                assert!(matches!(kind, FetchErrorKind::Status));
            }
            _ => panic!("expected Fetch"),
        }
    }

    #[test]
    fn test_fetch_error_display_names_source() {
        let err = LinkError::fetch(
            TldSource::PublicSuffix,
            FetchErrorKind::Transport,
            "connection refused",
        );
        let display = format!("{}", err);
        assert!(display.contains("public suffix list"), "got: {}", display);
        assert!(display.contains("connection refused"), "got: {}", display);
    }

    #[test]
    fn test_construction_error_from_regex() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: LinkError = regex_err.into();
        assert!(matches!(err, LinkError::Construction(_)));
        assert!(format!("{}", err).starts_with("Pattern construction error"));
    }
}
