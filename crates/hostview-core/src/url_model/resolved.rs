//! A URL that was built and successfully parsed.

use std::fmt;

use url::Url;

use crate::error::BuildError;

/// The string handed to a presenter.
///
/// Keeps the text exactly as built (no trailing slash is added) next to the
/// parsed form, which presenters use for scheme and host checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    raw: String,
    parsed: Url,
}

impl ResolvedUrl {
    /// Parses `raw`; fails if it is empty or not a URL.
    pub fn parse(raw: String) -> Result<Self, BuildError> {
        if raw.is_empty() {
            return Err(BuildError::Empty);
        }
        match Url::parse(&raw) {
            Ok(parsed) => Ok(Self { raw, parsed }),
            Err(source) => Err(BuildError::Malformed { url: raw, source }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn url(&self) -> &Url {
        &self.parsed
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for ResolvedUrl {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
