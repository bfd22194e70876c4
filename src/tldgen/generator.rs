use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::time::Duration;

use tracing::{info, trace};
use ureq::Agent;

use crate::error::{FetchErrorKind, LinkError, Result};

use super::source::TldSource;

/// Normalized TLDs collected during one generation run
pub type TldSet = HashSet<String>;

/// ASCII-compatible encoding prefix of internationalized labels
pub const PUNYCODE_PREFIX: &str = "xn--";

/// Default timeout for each fetch: 30 seconds
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

const GENERATED_HEADER: &str = "// Generated by tldgen. DO NOT EDIT.\n";

/// Lowercase a candidate, dropping it if empty or punycode.
pub fn normalize(candidate: &str) -> Option<String> {
    let tld = candidate.to_lowercase();
    if tld.is_empty() || tld.starts_with(PUNYCODE_PREFIX) {
        return None;
    }
    Some(tld)
}

/// Fold the candidates found in `reader` into `tlds` and hand the set back.
///
/// Input is consumed one line at a time.
pub fn accumulate<R: BufRead>(mut tlds: TldSet, reader: R, source: TldSource) -> Result<TldSet> {
    for line in reader.lines() {
        let line =
            line.map_err(|e| LinkError::fetch(source, FetchErrorKind::Read, e.to_string()))?;

        let Some(candidate) = source.candidate(&line) else {
            continue;
        };

        match normalize(candidate) {
            Some(tld) => {
                tlds.insert(tld);
            }
            None => trace!(source = %source, candidate, "skipping candidate"),
        }
    }
    Ok(tlds)
}

/// Sort the set into its final byte-ordered list
pub fn finalize(tlds: TldSet) -> Vec<String> {
    let mut list: Vec<String> = tlds.into_iter().collect();
    list.sort_unstable();
    list
}

/// Render the list as the Rust source of `src/tlds.rs`
pub fn render<S: AsRef<str>>(tlds: &[S]) -> String {
    let mut out = String::with_capacity(tlds.len() * 16 + 128);
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    out.push_str("/// Sorted list of all public top-level domains\n");
    out.push_str("pub const TLDS: &[&str] = &[\n");
    for tld in tlds {
        // Writing into a String cannot fail
        let _ = writeln!(out, "    {:?},", tld.as_ref());
    }
    out.push_str("];\n");
    out
}

/// Write the rendered list to `path`.
///
/// The file is written next to `path` first and renamed into place, so an
/// interrupted write never leaves a truncated list behind.
pub fn write_tlds<S: AsRef<str>>(path: impl AsRef<Path>, tlds: &[S]) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");

    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(render(tlds).as_bytes())?;
    file.flush()?;
    drop(file);

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(LinkError::IoError(e));
    }
    Ok(())
}

/// Fetches both TLD sources and merges them into one sorted list
#[derive(Debug, Clone)]
pub struct TldGenerator {
    pub iana_url: String,
    pub public_suffix_url: String,
    pub timeout: Duration,
}

impl TldGenerator {
    /// Create a generator pointed at the upstream sources
    pub fn new() -> Self {
        Self {
            iana_url: TldSource::Iana.default_url().to_string(),
            public_suffix_url: TldSource::PublicSuffix.default_url().to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Set custom IANA list URL
    pub fn with_iana_url(mut self, url: impl Into<String>) -> Self {
        self.iana_url = url.into();
        self
    }

    /// Set custom Public Suffix List URL
    pub fn with_public_suffix_url(mut self, url: impl Into<String>) -> Self {
        self.public_suffix_url = url.into();
        self
    }

    /// Set the timeout applied to each fetch
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn url(&self, source: TldSource) -> &str {
        match source {
            TldSource::Iana => &self.iana_url,
            TldSource::PublicSuffix => &self.public_suffix_url,
        }
    }

    /// Open a streaming reader over one source
    fn fetch(&self, agent: &Agent, source: TldSource) -> Result<impl BufRead> {
        let url = self.url(source);
        info!(source = %source, url, "fetching");

        let response = agent.get(url).call().map_err(|e| match e {
            ureq::Error::StatusCode(code) => LinkError::fetch(
                source,
                FetchErrorKind::Status,
                format!("HTTP {} from {}", code, url),
            ),
            other => LinkError::fetch(
                source,
                FetchErrorKind::Transport,
                format!("request to {} failed: {}", url, other),
            ),
        })?;

        let (_, body) = response.into_parts();
        Ok(BufReader::new(body.into_reader()))
    }

    /// Fetch both sources in order and return the sorted, deduplicated list.
    ///
    /// The first failure aborts the run.
    pub fn generate(&self) -> Result<Vec<String>> {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(self.timeout))
            .build()
            .into();

        let mut tlds = TldSet::new();
        for source in TldSource::ALL {
            let before = tlds.len();
            let reader = self.fetch(&agent, source)?;
            tlds = accumulate(tlds, reader, source)?;
            info!(source = %source, added = tlds.len() - before, "merged");
        }

        let list = finalize(tlds);
        info!(count = list.len(), "generated TLD list");
        Ok(list)
    }

    /// Generate the list and write it to `path`. Nothing is written on failure.
    pub fn generate_to(&self, path: impl AsRef<Path>) -> Result<usize> {
        let list = self.generate()?;
        write_tlds(path, &list)?;
        Ok(list.len())
    }
}

impl Default for TldGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("COM"), Some("com".to_string()));
        assert_eq!(normalize("XN--P1AI"), None);
        assert_eq!(normalize("xn--abc"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("РФ"), Some("рф".to_string()));
    }

    #[test]
    fn test_accumulate_both_sources() {
        let iana = Cursor::new("EXAMPLE\nXN--ABC\n#comment\n\n");
        let psl = Cursor::new("uk\nco.uk\nexample\n");

        let tlds = accumulate(TldSet::new(), iana, TldSource::Iana).unwrap();
        let tlds = accumulate(tlds, psl, TldSource::PublicSuffix).unwrap();

        let expected: TldSet = ["example", "uk"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tlds, expected);
    }

    #[test]
    fn test_accumulate_rejects_invalid_utf8() {
        let reader = Cursor::new(vec![b'c', b'o', b'm', b'\n', 0xff, 0xfe, b'\n']);
        let err = accumulate(TldSet::new(), reader, TldSource::Iana).unwrap_err();
        assert!(matches!(
            err,
            LinkError::Fetch {
                kind: FetchErrorKind::Read,
                ..
            }
        ));
    }

    #[test]
    fn test_finalize_sorts_by_byte_order() {
        let tlds: TldSet = ["org", "com", "рф", "net"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(finalize(tlds), vec!["com", "net", "org", "рф"]);
    }

    #[test]
    fn test_render() {
        let rendered = render(&["com", "рф"]);
        assert_eq!(
            rendered,
            "// Generated by tldgen. DO NOT EDIT.\n\
             \n\
             /// Sorted list of all public top-level domains\n\
             pub const TLDS: &[&str] = &[\n    \"com\",\n    \"рф\",\n];\n"
        );
    }

    #[test]
    fn test_write_tlds_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tlds.rs");
        fs::write(&path, "stale").unwrap();

        write_tlds(&path, &["com", "org"]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(GENERATED_HEADER));
        assert!(written.contains("    \"org\",\n"));
        assert!(!dir.path().join("tlds.tmp").exists());
    }

    #[test]
    fn test_generator_builder_pattern() {
        let generator = TldGenerator::new()
            .with_iana_url("http://127.0.0.1:1/iana")
            .with_public_suffix_url("http://127.0.0.1:1/psl")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(generator.url(TldSource::Iana), "http://127.0.0.1:1/iana");
        assert_eq!(generator.url(TldSource::PublicSuffix), "http://127.0.0.1:1/psl");
        assert_eq!(generator.timeout, Duration::from_secs(5));
        assert_eq!(
            TldGenerator::default().iana_url,
            TldSource::Iana.default_url()
        );
    }
}
