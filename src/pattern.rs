//! Regular-expression fragments and the assembly of the full patterns.
//!
//! Everything that does not depend on the TLD list is a `const` built with
//! `concat!`. The host pattern and everything above it needs the TLD list and
//! is assembled by [`Patterns::new`].

use crate::types::MatcherKind;

macro_rules! letters {
    () => {
        r"a-zA-Z\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}"
    };
}

macro_rules! iri_char {
    () => {
        concat!(letters!(), "0-9")
    };
}

macro_rules! path_char {
    () => {
        concat!(iri_char!(), r#".,:;\-+_()?@&=$~!*%'""#)
    };
}

macro_rules! ipv4_octet {
    () => {
        r"(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[1-9]|0)"
    };
}

macro_rules! ipv4_addr {
    () => {
        concat!(
            "(?:",
            ipv4_octet!(),
            r"\.",
            ipv4_octet!(),
            r"\.",
            ipv4_octet!(),
            r"\.",
            ipv4_octet!(),
            ")"
        )
    };
}

macro_rules! hex16 {
    () => {
        "[0-9A-Fa-f]{1,4}"
    };
}

// Octet form used inside the embedded-IPv4 tail of an IPv6 address.
macro_rules! ipv6_dec_octet {
    () => {
        "(?:25[0-5]|(?:2[0-4]|1[0-9]|[1-9])?[0-9])"
    };
}

macro_rules! ipv6_addr {
    () => {
        concat!(
            "(?:",
            // Up to five leading groups, with `::` allowed after any of them.
            "(?:",
            hex16!(), ":(?:",
            hex16!(), ":(?:",
            hex16!(), ":(?:",
            hex16!(), ":(?:",
            hex16!(), ":[0-9A-Fa-f]{0,4}|:", hex16!(),
            ")?|(?::", hex16!(), "){0,2}",
            ")|(?::", hex16!(), "){0,3}",
            ")|(?::", hex16!(), "){0,4}",
            ")|:(?::", hex16!(), "){0,5}",
            ")",
            // Two trailing groups or an embedded IPv4 address.
            "(?:(?::", hex16!(), "){2}|:",
            ipv6_dec_octet!(),
            r"(?:\.",
            ipv6_dec_octet!(),
            "){3})",
            "|(?:(?:", hex16!(), ":){1,6}|:):[0-9A-Fa-f]{0,4}",
            "|(?:", hex16!(), ":){7}:",
            ")"
        )
    };
}

macro_rules! ip_addr {
    () => {
        concat!("(?:", ipv4_addr!(), "|", ipv6_addr!(), ")")
    };
}

macro_rules! iri_label {
    () => {
        concat!(
            "[",
            iri_char!(),
            "](?:[",
            iri_char!(),
            r"\-]{0,61}[",
            iri_char!(),
            "])?"
        )
    };
}

/// Letter-like code points, as explicit ranges.
pub const LETTERS: &str = letters!();

/// Characters allowed in a hostname label, minus the hyphen.
pub const IRI_CHAR: &str = iri_char!();

/// Characters allowed in a URL path segment.
pub const PATH_CHAR: &str = path_char!();

/// A dotted-quad IPv4 address with every octet in 0-255.
pub const IPV4_ADDR: &str = ipv4_addr!();

/// A colon-hex IPv6 address, including `::` compression and the embedded
/// IPv4 tail. Brackets are not part of it.
pub const IPV6_ADDR: &str = ipv6_addr!();

/// IPv4 or IPv6, IPv4 first.
pub const IP_ADDR: &str = ip_addr!();

/// A single hostname label: at most 63 characters, no leading or trailing
/// hyphen.
pub const IRI_LABEL: &str = iri_label!();

/// Upper bound for the fallback path-segment run. An unbounded run here makes
/// the alternation prefer it over the IRI-terminated form.
pub const MAX_PATH_RUN: usize = 100;

/// Upper bound for the local part of an email address.
pub const MAX_EMAIL_LOCAL: usize = 256;

/// Build an alternation over `tlds`.
///
/// Longer entries come first so `example.community` is not cut short at
/// `com`. Duplicates are dropped and every entry is escaped.
pub fn tld_alternation<S: AsRef<str>>(tlds: &[S]) -> String {
    let mut sorted: Vec<&str> = tlds.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    sorted.dedup();

    let escaped: Vec<String> = sorted.into_iter().map(regex::escape).collect();
    format!("(?:{})", escaped.join("|"))
}

/// Host: labels followed by a known TLD, an IP address, or `localhost`.
pub fn host_pattern<S: AsRef<str>>(tlds: &[S]) -> String {
    format!(
        r"(?:(?:{IRI_LABEL}\.)+{}|{IP_ADDR}|localhost)",
        tld_alternation(tlds)
    )
}

/// Optional scheme, host, optional port, then path segments.
pub fn web_url_pattern(host: &str) -> String {
    format!(
        r"(?:(?:https?://)?{host}(?::[0-9]{{1,5}})?)(?:/(?:[{PATH_CHAR}]*[{IRI_CHAR}]|[{PATH_CHAR}]{{0,{MAX_PATH_RUN}}}))*"
    )
}

pub fn email_pattern(host: &str) -> String {
    format!(r"[a-zA-Z0-9._%\-+]{{1,{MAX_EMAIL_LOCAL}}}@{host}")
}

pub fn all_pattern(web_url: &str, email: &str) -> String {
    format!("(?:{web_url}|{email})")
}

/// The three complete patterns for one TLD list.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub host: String,
    pub web_url: String,
    pub email: String,
    pub all: String,
}

impl Patterns {
    /// Assemble all patterns bottom-up against `tlds`.
    pub fn new<S: AsRef<str>>(tlds: &[S]) -> Self {
        let host = host_pattern(tlds);
        let web_url = web_url_pattern(&host);
        let email = email_pattern(&host);
        let all = all_pattern(&web_url, &email);
        Self {
            host,
            web_url,
            email,
            all,
        }
    }

    /// Pattern source for the given matcher kind
    pub fn get(&self, kind: MatcherKind) -> &str {
        match kind {
            MatcherKind::WebUrl => &self.web_url,
            MatcherKind::Email => &self.email,
            MatcherKind::All => &self.all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn anchored(fragment: &str) -> Regex {
        Regex::new(&format!("^(?:{})$", fragment)).unwrap()
    }

    #[test]
    fn test_fragments_compile() {
        for fragment in [IPV4_ADDR, IPV6_ADDR, IP_ADDR, IRI_LABEL] {
            assert!(Regex::new(fragment).is_ok(), "invalid fragment: {}", fragment);
        }
        assert!(Regex::new(&format!("[{}]", PATH_CHAR)).is_ok());
    }

    #[test]
    fn test_path_char_contents() {
        let class = Regex::new(&format!("^[{}]+$", PATH_CHAR)).unwrap();
        assert!(class.is_match(r#".,:;-+_()?@&=$~!*%'""#));
        assert!(class.is_match("caf\u{e9}"));
        assert!(!class.is_match("a b"));
        assert!(!class.is_match("<"));
        assert!(!class.is_match("/"));
        assert!(!class.is_match("#"));
    }

    #[test]
    fn test_ipv4_boundaries() {
        let re = anchored(IPV4_ADDR);
        for ok in ["0.0.0.0", "255.255.255.255", "10.0.0.1", "192.168.1.100", "1.2.3.4"] {
            assert!(re.is_match(ok), "should match {}", ok);
        }
        for bad in ["999.1.1.1", "256.1.1.1", "1.2.3.256", "1.2.3", "1.2.3.4.5", "01.2.3.4"] {
            assert!(!re.is_match(bad), "should not match {}", bad);
        }
    }

    #[test]
    fn test_ipv6_forms() {
        let re = anchored(IPV6_ADDR);
        for ok in [
            "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
            "2001:db8::1",
            "::1",
            "::",
            "1::",
            "fe80::1:2",
            "1:2:3:4:5:6:7::",
            "::ffff:192.0.2.1",
            "64:ff9b::192.0.2.33",
        ] {
            assert!(re.is_match(ok), "should match {}", ok);
        }
        for bad in ["12345::1", "1:2:3:4:5:6:7:8:9", "::ffff:256.0.0.1", "g::1"] {
            assert!(!re.is_match(bad), "should not match {}", bad);
        }
    }

    #[test]
    fn test_label_length_and_hyphens() {
        let re = anchored(IRI_LABEL);
        assert!(re.is_match("a"));
        assert!(re.is_match("my-host"));
        assert!(re.is_match(&"a".repeat(63)));
        assert!(!re.is_match(&"a".repeat(64)));
        assert!(!re.is_match("-host"));
        assert!(!re.is_match("host-"));
        assert!(re.is_match("пример"));
    }

    #[test]
    fn test_tld_alternation_prefers_longer() {
        let alternation = tld_alternation(&["com", "community", "com", "co"]);
        assert_eq!(alternation, "(?:community|com|co)");
    }

    #[test]
    fn test_host_pattern() {
        let re = anchored(&host_pattern(&["com", "uk"]));
        assert!(re.is_match("example.com"));
        assert!(re.is_match("a.b.co.uk"));
        assert!(re.is_match("localhost"));
        assert!(re.is_match("127.0.0.1"));
        assert!(re.is_match("::1"));
        assert!(!re.is_match("example.org"));
        assert!(!re.is_match("com"));
    }

    #[test]
    fn test_patterns_get() {
        let patterns = Patterns::new(&["com"]);
        assert_eq!(patterns.get(MatcherKind::WebUrl), patterns.web_url);
        assert_eq!(patterns.get(MatcherKind::Email), patterns.email);
        assert!(patterns.all.contains(&patterns.web_url));
        assert!(patterns.all.contains(&patterns.email));
    }
}
