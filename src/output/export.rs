//! CSV export of repositories

use std::path::Path;

use thiserror::Error;

use super::console::UNKNOWN_LANGUAGE;
use crate::github::Repository;

/// Column names, in order, of the exported file.
pub const CSV_HEADERS: [&str; 7] = [
    "full_name",
    "stargazers_count",
    "forks_count",
    "updated_at",
    "language",
    "html_url",
    "description",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Builds one CSV row. Unlike the console, a missing description is left empty.
fn csv_row(repo: &Repository) -> [String; 7] {
    [
        repo.full_name.clone(),
        repo.stargazers_count.to_string(),
        repo.forks_count.to_string(),
        repo.updated_at_raw.clone().unwrap_or_default(),
        repo.language().unwrap_or(UNKNOWN_LANGUAGE).to_string(),
        repo.html_url.clone(),
        repo.description.clone().unwrap_or_default(),
    ]
}

/// Writes the header row and one row per repository to `path`, replacing any
/// existing file. The file is closed before returning on every path.
pub fn export_to_csv(path: &Path, repos: &[Repository]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADERS)?;
    for repo in repos {
        writer.write_record(csv_row(repo))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo(name: &str, language: Option<&str>, description: Option<&str>) -> Repository {
        Repository {
            full_name: name.to_string(),
            stargazers_count: 150,
            forks_count: 3,
            updated_at_raw: Some("2024-06-01T00:00:00Z".to_string()),
            language: language.map(String::from),
            html_url: format!("https://github.com/{name}"),
            description: description.map(String::from),
        }
    }

    #[test]
    fn test_header_written_for_empty_set() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("empty.csv");

        export_to_csv(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "full_name,stargazers_count,forks_count,updated_at,language,html_url,description\n"
        );
    }

    #[test]
    fn test_rows_with_placeholders() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("out.csv");
        let repos = vec![
            repo("octo/cat", Some("Rust"), Some("meow")),
            repo("octo/dog", None, None),
        ];

        export_to_csv(&path, &repos).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "octo/cat,150,3,2024-06-01T00:00:00Z,Rust,https://github.com/octo/cat,meow"
        );
        assert_eq!(
            lines[2],
            "octo/dog,150,3,2024-06-01T00:00:00Z,Unknown,https://github.com/octo/dog,"
        );
    }

    #[test]
    fn test_descriptions_with_commas_are_quoted() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("quoted.csv");
        let repos = vec![repo("octo/cat", Some("Rust"), Some("fast, \"small\" tool"))];

        export_to_csv(&path, &repos).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[6], "fast, \"small\" tool");
    }

    #[test]
    fn test_missing_directory_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("missing").join("out.csv");

        let result = export_to_csv(&path, &[repo("octo/cat", None, None)]);
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
