use crate::error::Result;
use crate::github::types::{ListParams, RepositorySummary};
use crate::github::RepoSource;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::ACCEPT;

const LOG_TARGET: &str = "github";

const GITHUB_JSON: &str = "application/vnd.github+json";

// Login names are alphanumerics and dashes; keep the usual unreserved marks readable too.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
}

impl GitHubClient {
    /// Unauthenticated client against `base_url`, with octocrab's retry layer switched off.
    pub fn new(base_url: &str) -> Result<Self> {
        let octo = Octocrab::builder()
            .base_uri(base_url)?
            .add_header(ACCEPT, GITHUB_JSON.to_string())
            .add_retry_config(RetryConfig::None)
            .build()?;

        Ok(Self { octo })
    }

    pub async fn list_user_repos(&self, user: &str) -> Result<Vec<RepositorySummary>> {
        let route = format!("/users/{}/repos", utf8_percent_encode(user, PATH_SEGMENT));
        log::debug!(target: LOG_TARGET, "GET {route}");

        let repos: Vec<RepositorySummary> =
            self.octo.get(&route, Some(&ListParams::default())).await?;

        log::debug!(target: LOG_TARGET, "received {} repositories for {user}", repos.len());
        Ok(repos)
    }
}

impl RepoSource for GitHubClient {
    async fn list_repositories(&self, identity: &str) -> Result<Vec<RepositorySummary>> {
        self.list_user_repos(identity).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn lists_repositories_with_expected_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .and(query_param("per_page", "100"))
            .and(query_param("sort", "updated"))
            .and(header_exists("accept"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "name": "hello-world",
                    "html_url": "https://github.com/octocat/hello-world",
                    "description": null,
                    "language": "Rust",
                    "stargazers_count": 7,
                    "updated_at": "2024-02-01T10:00:00Z",
                    "fork": false,
                    "private": false,
                    "id": 1296269
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = GitHubClient::new(&server.uri()).unwrap();
        let repos = client.list_user_repos("octocat").await.unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "hello-world");
        assert_eq!(repos[0].description, None);
        assert_eq!(repos[0].language.as_deref(), Some("Rust"));
        assert_eq!(repos[0].stargazers_count, 7);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(&server)
            .await;

        let client = GitHubClient::new(&server.uri()).unwrap();
        let err = client.list_user_repos("octocat").await.unwrap_err();
        assert!(matches!(err, FolioError::GitHub(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
            .mount(&server)
            .await;

        let client = GitHubClient::new(&server.uri()).unwrap();
        assert!(client.list_user_repos("octocat").await.is_err());
    }
}
