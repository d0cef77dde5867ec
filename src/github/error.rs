//! GitHub search error types.

use thiserror::Error;

/// Errors that can occur while fetching one page of search results.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Any non-200 response. Carries the body so rate-limit and validation
    /// messages from GitHub reach the user verbatim.
    #[error("GitHub API error: {status} {body}")]
    Api { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("GITHUB_TOKEN contains characters not allowed in an HTTP header")]
    InvalidCredential,
}

impl FetchError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Api { status, .. } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the error indicates rate limiting (403/429).
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.status(), Some(403) | Some(429))
    }
}

/// A repository record whose fields cannot be interpreted.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("{repository}: missing updated_at")]
    MissingTimestamp { repository: String },

    #[error("{repository}: updated_at {value:?} is not in YYYY-MM-DDTHH:MM:SSZ format")]
    InvalidTimestamp {
        repository: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
