//! reposcan: search GitHub repositories and filter them by stars, language and recency
//! Results are printed to the console and optionally exported to CSV.

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgMatches, Command as ClapCommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use repo_scanner::commands::search::{handle_search_command, SearchOptions};
use repo_scanner::core::{
    parse_updated_after, ApiConfig, FilterCriteria, DEFAULT_MIN_STARS, DEFAULT_PAGES,
    DEFAULT_PER_PAGE, DEFAULT_QUERY, MAX_PER_PAGE,
};
use repo_scanner::github::{SearchRequest, SortKey, SortOrder};

const DEFAULT_LOG_FILTER: &str = "repo_scanner=warn,reposcan=warn";

fn build_cli() -> ClapCommand {
    ClapCommand::new("reposcan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Search GitHub repositories and filter them by stars, language and recency")
        .after_help(
            "Set GITHUB_TOKEN (environment or .env file) to authenticate and raise the search rate limit.",
        )
        .arg(
            Arg::new("query")
                .short('q')
                .long("query")
                .value_name("TEXT")
                .help("Search query in GitHub search syntax")
                .default_value(DEFAULT_QUERY),
        )
        .arg(
            Arg::new("min_stars")
                .long("min-stars")
                .alias("min_stars")
                .value_name("N")
                .help("Minimum number of stars required for a repository")
                .value_parser(value_parser!(u64))
                .default_value(DEFAULT_MIN_STARS.to_string()),
        )
        .arg(
            Arg::new("per_page")
                .long("per-page")
                .alias("per_page")
                .value_name("N")
                .help("Number of results per page (maximum 100)")
                .value_parser(value_parser!(u8).range(1..=MAX_PER_PAGE as i64))
                .default_value(DEFAULT_PER_PAGE.to_string()),
        )
        .arg(
            Arg::new("pages")
                .long("pages")
                .value_name("N")
                .help("Number of pages to fetch")
                .value_parser(value_parser!(u32).range(1..))
                .default_value(DEFAULT_PAGES.to_string()),
        )
        .arg(
            Arg::new("language")
                .short('l')
                .long("language")
                .value_name("LANG")
                .help("Only include repositories whose primary language matches (case-insensitive)"),
        )
        .arg(
            Arg::new("updated_after")
                .long("updated-after")
                .alias("updated_after")
                .value_name("YYYY-MM-DD")
                .help("Only include repositories updated on or after this date")
                .value_parser(parse_updated_after),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Export the filtered results to this CSV file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .value_name("KEY")
                .help("Field to sort results by")
                .value_parser(PossibleValuesParser::new(SortKey::VARIANTS.iter().copied()))
                .default_value(SortKey::default().as_str()),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .value_name("ORDER")
                .help("Sort order")
                .value_parser(PossibleValuesParser::new(SortOrder::VARIANTS.iter().copied()))
                .default_value(SortOrder::default().as_str()),
        )
}

fn search_options(matches: &ArgMatches) -> SearchOptions {
    let query = matches
        .get_one::<String>("query")
        .cloned()
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());

    let mut request = SearchRequest::new(query);
    request.per_page = matches
        .get_one::<u8>("per_page")
        .copied()
        .unwrap_or(DEFAULT_PER_PAGE);
    request.sort = matches
        .get_one::<String>("sort")
        .and_then(|s| SortKey::parse(s))
        .unwrap_or_default();
    request.order = matches
        .get_one::<String>("order")
        .and_then(|s| SortOrder::parse(s))
        .unwrap_or_default();

    let criteria = FilterCriteria::new(
        matches
            .get_one::<u64>("min_stars")
            .copied()
            .unwrap_or(DEFAULT_MIN_STARS),
        matches.get_one::<String>("language").cloned(),
        matches.get_one::<chrono::NaiveDateTime>("updated_after").copied(),
    );

    SearchOptions {
        request,
        pages: matches.get_one::<u32>("pages").copied().unwrap_or(DEFAULT_PAGES),
        criteria,
        output: matches.get_one::<PathBuf>("output").cloned(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Argument errors, including a malformed --updated-after, exit here
    // before any network or file activity
    let matches = build_cli().get_matches();
    let options = search_options(&matches);
    let api = ApiConfig::from_env();
    tracing::debug!(?api, ?options, "starting search");

    handle_search_command(api, options).await
}
