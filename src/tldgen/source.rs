use std::fmt;

/// An upstream list that TLD candidates are extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TldSource {
    /// IANA root zone TLD list, one TLD per line, `#` comments
    Iana,
    /// Public Suffix List, one rule per line, `//` comments
    PublicSuffix,
}

impl TldSource {
    pub const ALL: [TldSource; 2] = [TldSource::Iana, TldSource::PublicSuffix];

    /// Get default download URL for this source
    pub fn default_url(&self) -> &'static str {
        match self {
            TldSource::Iana => "https://data.iana.org/TLD/tlds-alpha-by-domain.txt",
            TldSource::PublicSuffix => "https://publicsuffix.org/list/effective_tld_names.dat",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TldSource::Iana => "IANA TLD list",
            TldSource::PublicSuffix => "public suffix list",
        }
    }

    /// Extract the TLD candidate carried by one line of this source.
    ///
    /// IANA: any non-blank line without a `#`.
    /// Public Suffix List: any non-blank line with neither `/` nor `.`, which
    /// leaves out comments, multi-label suffixes, wildcards and exceptions.
    pub fn candidate<'a>(&self, line: &'a str) -> Option<&'a str> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let rejected = match self {
            TldSource::Iana => line.contains('#'),
            TldSource::PublicSuffix => line.contains(['/', '.']),
        };
        if rejected {
            None
        } else {
            Some(line)
        }
    }
}

impl fmt::Display for TldSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
