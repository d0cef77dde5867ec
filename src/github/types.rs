//! GitHub search API data types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

use super::error::RecordError;

/// Timestamp format GitHub uses for `updated_at` (UTC, no sub-second precision).
pub const GITHUB_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A repository as returned in the `items` array of a search response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    /// Qualified `owner/name`.
    pub full_name: String,
    /// Star count; a missing or `null` field counts as zero.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub stargazers_count: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub forks_count: u64,
    /// Raw `YYYY-MM-DDTHH:MM:SSZ` string, parsed lazily by [`Repository::updated_at`].
    #[serde(default, rename = "updated_at")]
    pub updated_at_raw: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}

impl Repository {
    /// Parses the last-updated timestamp.
    ///
    /// Fails when the field is missing or does not follow
    /// [`GITHUB_TIMESTAMP_FORMAT`].
    pub fn updated_at(&self) -> Result<NaiveDateTime, RecordError> {
        let raw = self
            .updated_at_raw
            .as_deref()
            .ok_or_else(|| RecordError::MissingTimestamp {
                repository: self.full_name.clone(),
            })?;

        NaiveDateTime::parse_from_str(raw, GITHUB_TIMESTAMP_FORMAT).map_err(|source| {
            RecordError::InvalidTimestamp {
                repository: self.full_name.clone(),
                value: raw.to_string(),
                source,
            }
        })
    }

    /// Primary language, treating an empty string the same as an absent one.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|lang| !lang.is_empty())
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub total_count: u64,
    /// Set by GitHub when the search timed out before covering every match.
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<Repository>,
}

/// Field GitHub sorts search results by
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Stars,
    Forks,
    HelpWantedIssues,
    Updated,
}

impl SortKey {
    pub const VARIANTS: &'static [&'static str] =
        &["stars", "forks", "help-wanted-issues", "updated"];

    /// Returns the query parameter value for this key
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Stars => "stars",
            SortKey::Forks => "forks",
            SortKey::HelpWantedIssues => "help-wanted-issues",
            SortKey::Updated => "updated",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "stars" => Some(SortKey::Stars),
            "forks" => Some(SortKey::Forks),
            "help-wanted-issues" => Some(SortKey::HelpWantedIssues),
            "updated" => Some(SortKey::Updated),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    pub const VARIANTS: &'static [&'static str] = &["desc", "asc"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Desc => "desc",
            SortOrder::Asc => "asc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "desc" => Some(SortOrder::Desc),
            "asc" => Some(SortOrder::Asc),
            _ => None,
        }
    }
}

/// Parameters shared by every page of one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query in GitHub search syntax, passed through untouched.
    pub query: String,
    pub sort: SortKey,
    pub order: SortOrder,
    /// Results per page, 1 to 100.
    pub per_page: u8,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            sort: SortKey::default(),
            order: SortOrder::default(),
            per_page: crate::core::DEFAULT_PER_PAGE,
        }
    }

    /// Query parameters for the given page number.
    pub fn query_params(&self, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.query.clone()),
            ("sort", self.sort.as_str().to_string()),
            ("order", self.order.as_str().to_string()),
            ("per_page", self.per_page.to_string()),
            ("page", page.to_string()),
        ]
    }
}
