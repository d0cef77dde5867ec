//! # repo-scanner
//!
//! `repo-scanner` searches GitHub repositories, filters the results by star
//! count, language and recency, and renders them to the console or a CSV
//! file. It powers the `reposcan` CLI tool.
//!
//! ## Example
//!
//! ```rust,no_run
//! use repo_scanner::core::{apply_filters, ApiConfig, FilterCriteria};
//! use repo_scanner::github::{create_http_client, search_repositories, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ApiConfig::from_env();
//!     let http = create_http_client()?;
//!     let page = search_repositories(&http, &config, &SearchRequest::new("language:rust cli"), 1).await?;
//!     let popular = apply_filters(&page.items, &FilterCriteria::new(1000, None, None))?;
//!     for repo in popular {
//!         println!("{}: {}", repo.full_name, repo.stargazers_count);
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod core;
pub mod github;
pub mod output;
pub mod utils;
