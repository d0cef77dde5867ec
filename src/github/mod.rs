//! GitHub repository search: request types, client and errors.

pub mod client;
pub mod error;
pub mod types;

pub use client::{create_http_client, search_repositories, GitHubSearch, SearchBackend};
pub use error::{FetchError, RecordError};
pub use types::{
    Repository, SearchPage, SearchRequest, SortKey, SortOrder, GITHUB_TIMESTAMP_FORMAT,
};
