//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;

pub use self::fixtures::{mount_error_page, mount_page, start_search_server, RepoFixture};
