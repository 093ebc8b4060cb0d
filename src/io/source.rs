//! Document sources.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::{Error, Result};

/// Where a JSON document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Local file.
    File(PathBuf),
    /// `http://` or `https://` URL, fetched with a blocking GET.
    Url(String),
}

impl Source {
    /// Parses a source: URLs by scheme, anything else as a path.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Returns true for URL sources.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Reads the whole document as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperationFailed`] if the file cannot be read, the
    /// request fails or the server answers with a non-success status.
    pub fn read_to_string(&self, client: &reqwest::blocking::Client) -> Result<String> {
        match self {
            Self::File(path) => {
                std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
                    operation: "read_document".to_string(),
                    cause: format!("{}: {e}", path.display()),
                })
            },
            Self::Url(url) => {
                let response = client.get(url).send().map_err(|e| Error::OperationFailed {
                    operation: "fetch_document".to_string(),
                    cause: e.to_string(),
                })?;

                if !response.status().is_success() {
                    return Err(Error::OperationFailed {
                        operation: "fetch_document".to_string(),
                        cause: format!("{url} returned status: {}", response.status()),
                    });
                }

                response.text().map_err(|e| Error::OperationFailed {
                    operation: "fetch_document".to_string(),
                    cause: e.to_string(),
                })
            },
        }
    }
}

impl FromStr for Source {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Builds the blocking client used for URL sources.
#[must_use]
pub fn build_http_client(timeout: Duration) -> reqwest::blocking::Client {
    let mut builder = reqwest::blocking::Client::builder();
    if !timeout.is_zero() {
        builder = builder.timeout(timeout);
    }

    builder.build().unwrap_or_else(|err| {
        tracing::warn!("Failed to build HTTP client: {err}");
        reqwest::blocking::Client::new()
    })
}
