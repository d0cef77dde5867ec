//! GitHub search client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::error::FetchError;
use super::types::{SearchPage, SearchRequest};
use crate::core::config::{ApiConfig, REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Source of search result pages.
///
/// The pipeline only talks to this trait, so it can be driven by
/// [`GitHubSearch`] or by an in-memory backend.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetches a single page (1-based) of results for the request
    async fn search(&self, request: &SearchRequest, page: u32) -> Result<SearchPage, FetchError>;
}

/// Creates the HTTP client used for every request of a run.
pub fn create_http_client() -> Result<reqwest::Client, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// Issues one search request and parses the response.
///
/// Non-200 responses become [`FetchError::Api`] with the response body.
/// Nothing is retried.
pub async fn search_repositories(
    http: &reqwest::Client,
    config: &ApiConfig,
    request: &SearchRequest,
    page: u32,
) -> Result<SearchPage, FetchError> {
    let url = config.search_url();
    tracing::debug!(%url, page, per_page = request.per_page, "sending search request");

    let response = http
        .get(&url)
        .headers(config.headers()?)
        .query(&request.query_params(page))
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        tracing::debug!(status = status.as_u16(), page, "search request rejected");
        return Err(FetchError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let result: SearchPage = serde_json::from_str(&body)?;
    tracing::debug!(
        page,
        items = result.items.len(),
        total_count = result.total_count,
        "search page received"
    );
    if result.incomplete_results {
        tracing::warn!(page, "GitHub reported incomplete results for this page");
    }

    Ok(result)
}

/// [`SearchBackend`] backed by the GitHub REST API.
pub struct GitHubSearch {
    http: reqwest::Client,
    config: ApiConfig,
}

impl GitHubSearch {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http: create_http_client()?,
            config,
        })
    }
}

#[async_trait]
impl SearchBackend for GitHubSearch {
    async fn search(&self, request: &SearchRequest, page: u32) -> Result<SearchPage, FetchError> {
        search_repositories(&self.http, &self.config, request, page).await
    }
}
