//! Seed dataset used when no persisted snapshot is available.

use crate::model::Movie;
use reqwest::Url;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' answered HTTP {status}")]
    Status { url: Url, status: u16 },

    #[error("Failed to read fallback file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Fallback dataset is not a movie list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Static JSON document with the same array-of-movie shape as a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackSource {
    Http(Url),
    File(PathBuf),
}

impl FallbackSource {
    /// `http://` and `https://` sources are fetched, anything else is a path.
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            if let Ok(url) = Url::parse(source) {
                return Self::Http(url);
            }
        }
        Self::File(PathBuf::from(source))
    }

    /// One GET (or one file read). No retries; the caller degrades on error.
    pub async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<Movie>, FetchError> {
        match self {
            Self::Http(url) => {
                let transport = |source| FetchError::Transport {
                    url: url.clone(),
                    source,
                };
                let response = client.get(url.clone()).send().await.map_err(transport)?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }
                let body = response.bytes().await.map_err(transport)?;
                Ok(serde_json::from_slice(&body)?)
            }
            Self::File(path) => {
                let body = tokio::fs::read(path).await.map_err(|source| FetchError::Read {
                    path: path.clone(),
                    source,
                })?;
                Ok(serde_json::from_slice(&body)?)
            }
        }
    }
}

impl fmt::Display for FallbackSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
