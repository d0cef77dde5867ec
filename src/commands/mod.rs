//! Command implementations driven by the `reposcan` binary

pub mod search;
