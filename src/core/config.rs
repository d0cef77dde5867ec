//! Configuration constants and settings

use chrono::{NaiveDate, NaiveDateTime};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

use crate::github::FetchError;

// GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const SEARCH_REPOSITORIES_PATH: &str = "/search/repositories";
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub const USER_AGENT: &str = concat!("reposcan/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Environment variables
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const API_URL_ENV: &str = "REPOSCAN_API_URL";

// Search defaults
pub const DEFAULT_QUERY: &str =
    "crypto bot OR crypto sniper OR trading bot OR arbitrage bot OR crypto trading OR crypto signals";
pub const DEFAULT_MIN_STARS: u64 = 50;
pub const DEFAULT_PER_PAGE: u8 = 20;
pub const MAX_PER_PAGE: u8 = 100;
pub const DEFAULT_PAGES: u32 = 1;

// Date format accepted for --updated-after
pub const DATE_ARG_FORMAT: &str = "%Y-%m-%d";
pub const DATE_FORMAT_ERROR: &str = "updated_after must be in YYYY-MM-DD format.";

/// Connection settings for the GitHub API.
///
/// Built once at startup and handed to the fetcher explicitly; nothing about
/// the connection lives in process-wide state.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ApiConfig {
    /// Loads settings from the process environment.
    ///
    /// Without `GITHUB_TOKEN` requests go out unauthenticated and are subject
    /// to GitHub's lower search rate limit.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            base_url: non_empty(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token: non_empty(TOKEN_ENV),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn search_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            SEARCH_REPOSITORIES_PATH
        )
    }

    /// Headers attached to every search request.
    pub fn headers(&self) -> Result<HeaderMap, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&format!("token {token}"))
                .map_err(|_| FetchError::InvalidCredential)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

/// Parses a `YYYY-MM-DD` date into midnight UTC of that day.
pub fn parse_updated_after(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDate::parse_from_str(value.trim(), DATE_ARG_FORMAT)
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
        .map_err(|_| DATE_FORMAT_ERROR.to_string())
}
