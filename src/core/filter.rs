//! Star, language and recency filtering over an accumulated result set

use chrono::NaiveDateTime;

use super::config::DEFAULT_MIN_STARS;
use crate::github::{RecordError, Repository};

/// Inclusion predicates applied once to the whole accumulated result set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCriteria {
    pub min_stars: u64,
    /// Compared case-insensitively; `None` disables the language check.
    pub language: Option<String>,
    /// Inclusive lower bound on `updated_at`.
    pub updated_after: Option<NaiveDateTime>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_stars: DEFAULT_MIN_STARS,
            language: None,
            updated_after: None,
        }
    }
}

impl FilterCriteria {
    pub fn new(
        min_stars: u64,
        language: Option<String>,
        updated_after: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            min_stars,
            language: language.filter(|lang| !lang.is_empty()),
            updated_after,
        }
    }

    /// Evaluates popularity, then language, then recency, stopping at the
    /// first predicate that fails.
    ///
    /// The timestamp is only parsed when a recency bound is set.
    pub fn matches(&self, repo: &Repository) -> Result<bool, RecordError> {
        if repo.stargazers_count < self.min_stars {
            return Ok(false);
        }

        if let Some(wanted) = &self.language {
            match repo.language() {
                Some(lang) if lang.to_lowercase() == wanted.to_lowercase() => {}
                _ => return Ok(false),
            }
        }

        if let Some(threshold) = self.updated_after {
            if repo.updated_at()? < threshold {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

/// Returns the records satisfying every active predicate, in input order.
pub fn apply_filters(
    repos: &[Repository],
    criteria: &FilterCriteria,
) -> Result<Vec<Repository>, RecordError> {
    let mut filtered = Vec::with_capacity(repos.len());
    for repo in repos {
        if criteria.matches(repo)? {
            filtered.push(repo.clone());
        }
    }
    Ok(filtered)
}
