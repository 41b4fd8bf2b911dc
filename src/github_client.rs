use crate::error::ActivityError;
use anyhow::Result;
use log::info;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

const API_ROOT: &str = "https://api.github.com";

pub struct GithubClient {
    client: reqwest::Client,
    api_root: String,
}

impl GithubClient {
    pub fn new() -> Result<Self> {
        Self::with_api_root(API_ROOT)
    }

    fn with_api_root(api_root: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("github-activity-reporter"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            api_root: api_root.into(),
        })
    }

    /// Fetches the first page of public events for `username` and returns
    /// the raw body text. The status code is logged but never short-circuits:
    /// a 404 or 403 body still goes to the parser.
    pub async fn fetch_events(&self, username: &str) -> Result<String, ActivityError> {
        let url = self.events_url(username);
        info!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ActivityError::Fetch {
                url: url.clone(),
                source,
            })?;

        info!("Received {} status code", response.status());

        response
            .text()
            .await
            .map_err(|source| ActivityError::Fetch { url, source })
    }

    fn events_url(&self, username: &str) -> String {
        format!("{}/users/{}/events", self.api_root, username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn events_url_substitutes_the_username_verbatim() {
        let client = GithubClient::new().unwrap();
        assert_eq!(
            client.events_url("octocat"),
            "https://api.github.com/users/octocat/events"
        );
    }

    #[tokio::test]
    async fn fetch_events_returns_the_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/events"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let client = GithubClient::with_api_root(server.uri()).unwrap();
        let body = client.fetch_events("octocat").await.unwrap();
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn fetch_events_returns_the_body_even_on_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/nobody/events"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"message":"Not Found"}"#),
            )
            .mount(&server)
            .await;

        let client = GithubClient::with_api_root(server.uri()).unwrap();
        let body = client.fetch_events("nobody").await.unwrap();
        assert_eq!(body, r#"{"message":"Not Found"}"#);
    }

    #[tokio::test]
    async fn transport_failure_is_a_fetch_error() {
        // Nothing listens on port 1.
        let client = GithubClient::with_api_root("http://127.0.0.1:1").unwrap();
        let err = client.fetch_events("octocat").await.unwrap_err();
        assert!(matches!(err, ActivityError::Fetch { .. }));
    }
}
