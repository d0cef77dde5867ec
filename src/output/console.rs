//! Human-readable rendering of repositories

use std::io::{self, Write};

use thiserror::Error;

use crate::github::{RecordError, Repository};

pub const UNKNOWN_LANGUAGE: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description provided";
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const LABEL_WIDTH: usize = 14;
const SEPARATOR_WIDTH: usize = 60;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn write_field<W: Write>(out: &mut W, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{label:<width$} {value}", width = LABEL_WIDTH)
}

/// Writes one block per repository, in the given order.
pub fn present<W: Write>(out: &mut W, repos: &[Repository]) -> Result<(), PresentError> {
    for repo in repos {
        present_repository(out, repo)?;
    }
    Ok(())
}

/// Writes a single repository block followed by a separator line.
pub fn present_repository<W: Write>(out: &mut W, repo: &Repository) -> Result<(), PresentError> {
    // Parse before writing so a bad record never leaves a half-printed block
    let updated_at = repo.updated_at()?;

    write_field(out, "Name:", &repo.full_name)?;
    write_field(out, "Stars:", repo.stargazers_count)?;
    write_field(out, "Forks:", repo.forks_count)?;
    write_field(out, "Last Updated:", updated_at.format(DISPLAY_TIMESTAMP_FORMAT))?;
    write_field(out, "Language:", repo.language().unwrap_or(UNKNOWN_LANGUAGE))?;
    write_field(out, "URL:", &repo.html_url)?;
    write_field(
        out,
        "Description:",
        repo.description.as_deref().unwrap_or(NO_DESCRIPTION),
    )?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}
