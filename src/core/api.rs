//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality:
//! - API connection settings and search defaults
//! - Filter criteria and the filter pass
//!
//! Internal implementation details are not exposed through this API.

// Configuration
pub use super::config::{parse_updated_after, ApiConfig};
pub use super::config::{
    DEFAULT_API_URL, DEFAULT_MIN_STARS, DEFAULT_PAGES, DEFAULT_PER_PAGE, DEFAULT_QUERY,
    MAX_PER_PAGE,
};

// Environment variable names
pub use super::config::{API_URL_ENV, TOKEN_ENV};

// Filtering
pub use super::filter::{apply_filters, FilterCriteria};
