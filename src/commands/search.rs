//! Repository search command implementation
//!
//! Fetches the requested pages in order, filters the accumulated set once,
//! prints every surviving repository and optionally exports them to CSV.

use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::core::{apply_filters, ApiConfig, FilterCriteria};
use crate::github::{GitHubSearch, Repository, SearchBackend, SearchRequest};
use crate::output::{export_to_csv, present, ExportError};
use crate::utils::{set_terminal_title, set_terminal_title_and_flush};

/// Everything one search run needs besides the API connection
#[derive(Clone, Debug)]
pub struct SearchOptions {
    pub request: SearchRequest,
    /// Number of pages to fetch, starting at page 1
    pub pages: u32,
    pub criteria: FilterCriteria,
    /// CSV destination; no export when absent
    pub output: Option<PathBuf>,
}

/// Result set accumulated across pages
#[derive(Debug, Default)]
pub struct PageCollection {
    /// Items of every successful page, in fetch order. Duplicates are kept.
    pub repositories: Vec<Repository>,
    pub failed_pages: Vec<u32>,
}

/// Outcome of a completed run
#[derive(Debug)]
pub struct SearchReport {
    pub fetched: usize,
    pub failed_pages: Vec<u32>,
    pub repositories: Vec<Repository>,
    /// `None` when no export was requested
    pub export: Option<Result<PathBuf, ExportError>>,
}

/// Requests pages `1..=pages` one after another, announcing each request on
/// `out` before it is sent.
///
/// A failing page is reported and contributes nothing; the loop always runs
/// to the last page.
pub async fn collect_pages<B, W>(
    backend: &B,
    request: &SearchRequest,
    pages: u32,
    out: &mut W,
) -> io::Result<PageCollection>
where
    B: SearchBackend + ?Sized,
    W: Write,
{
    let mut collection = PageCollection::default();

    for page in 1..=pages {
        writeln!(out, "Searching GitHub: page {page}, query: '{}'", request.query)?;
        match backend.search(request, page).await {
            Ok(result) => collection.repositories.extend(result.items),
            Err(e) => {
                tracing::debug!(page, status = ?e.status(), "page skipped");
                writeln!(out, "Error fetching page {page}: {e}")?;
                if e.is_rate_limited() {
                    writeln!(out, "💡 Set GITHUB_TOKEN to raise the search rate limit")?;
                }
                collection.failed_pages.push(page);
            }
        }
    }

    Ok(collection)
}

/// Runs the fetch, filter, present and export pipeline against any backend.
///
/// Export failures are reported to `out` and recorded in the report; they
/// never abort the run. A repository with an unreadable timestamp does.
pub async fn run_search<B, W>(
    backend: &B,
    options: &SearchOptions,
    out: &mut W,
) -> Result<SearchReport>
where
    B: SearchBackend + ?Sized,
    W: Write,
{
    let collection = collect_pages(backend, &options.request, options.pages, out).await?;
    let fetched = collection.repositories.len();
    writeln!(out, "\nTotal repositories fetched: {fetched}")?;

    let filtered = apply_filters(&collection.repositories, &options.criteria)?;
    writeln!(out, "Repositories after filtering: {}\n", filtered.len())?;

    present(out, &filtered)?;

    let export = match &options.output {
        Some(path) => {
            let result = export_to_csv(path, &filtered);
            match &result {
                Ok(()) => writeln!(out, "\nResults exported to {}", path.display())?,
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = ?e, "export failed");
                    writeln!(out, "Error exporting to CSV: {e}")?
                }
            }
            Some(result.map(|()| path.clone()))
        }
        None => None,
    };

    Ok(SearchReport {
        fetched,
        failed_pages: collection.failed_pages,
        repositories: filtered,
        export,
    })
}

/// Handles the search command against the GitHub API, writing to stdout
pub async fn handle_search_command(api: ApiConfig, options: SearchOptions) -> Result<()> {
    set_terminal_title("🔍 reposcan");

    let backend = GitHubSearch::new(api)?;
    let mut stdout = io::stdout();
    let result = run_search(&backend, &options, &mut stdout).await;

    set_terminal_title_and_flush("✅ reposcan");
    result.map(|_| ())
}
