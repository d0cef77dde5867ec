//! Test fixtures for search responses and mock servers

use repo_scanner::core::ApiConfig;
use repo_scanner::github::GitHubSearch;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builder for one repository item of a search response
#[derive(Clone)]
pub struct RepoFixture {
    name: String,
    stars: Option<Value>,
    forks: u64,
    updated_at: String,
    language: Option<String>,
    description: Option<String>,
}

impl RepoFixture {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stars: Some(json!(0)),
            forks: 0,
            updated_at: "2024-06-01T00:00:00Z".to_string(),
            language: None,
            description: None,
        }
    }

    pub fn stars(mut self, stars: u64) -> Self {
        self.stars = Some(json!(stars));
        self
    }

    /// Drops `stargazers_count` from the JSON entirely
    pub fn without_stars(mut self) -> Self {
        self.stars = None;
        self
    }

    /// Sends `"stargazers_count": null`
    pub fn null_stars(mut self) -> Self {
        self.stars = Some(Value::Null);
        self
    }

    pub fn forks(mut self, forks: u64) -> Self {
        self.forks = forks;
        self
    }

    pub fn updated_at(mut self, updated_at: &str) -> Self {
        self.updated_at = updated_at.to_string();
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn to_json(&self) -> Value {
        let mut item = json!({
            "full_name": self.name,
            "forks_count": self.forks,
            "updated_at": self.updated_at,
            "language": self.language,
            "html_url": format!("https://github.com/{}", self.name),
            "description": self.description,
        });
        if let Some(stars) = &self.stars {
            item["stargazers_count"] = stars.clone();
        }
        item
    }
}

/// Starts a mock server and a search backend pointed at it
pub async fn start_search_server() -> (MockServer, GitHubSearch) {
    let server = MockServer::start().await;
    let config = ApiConfig::default().with_base_url(server.uri());
    let backend = GitHubSearch::new(config).expect("Failed to create search client");
    (server, backend)
}

/// Serves `repos` as the given page of results
pub async fn mount_page(server: &MockServer, page: u32, repos: &[RepoFixture]) {
    let items: Vec<Value> = repos.iter().map(RepoFixture::to_json).collect();
    let body = json!({
        "total_count": items.len(),
        "incomplete_results": false,
        "items": items,
    });

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Makes the given page fail with `status`
pub async fn mount_error_page(server: &MockServer, page: u32, status: u16) {
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("page", page.to_string()))
        .respond_with(
            ResponseTemplate::new(status).set_body_string(r#"{"message":"Server Error"}"#),
        )
        .expect(1)
        .mount(server)
        .await;
}
