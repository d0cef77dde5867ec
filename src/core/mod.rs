// Internal modules - exposed through `api`
pub(crate) mod config;
pub(crate) mod filter;

// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
