//! HTTP client for the Scryfall REST API.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{
    fetch::FetchJson,
    query::{NamedQuery, Query},
    types::ErrorObject,
    user_agent::default_user_agent,
    Error,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";

/// Request timeout for Scryfall API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Scryfall API.
///
/// Holds one `reqwest::Client` (rustls, gzip, 30-second timeout) configured
/// with a stable user agent, as Scryfall requires.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://api.scryfall.com`.
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production Scryfall API.
    pub fn new() -> Result<Self, Error> {
        Self::with_settings(DEFAULT_BASE_URL, &default_user_agent())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_settings(base_url, &default_user_agent())
    }

    /// Creates a new client with a custom base URL and user agent.
    pub fn with_settings(base_url: &str, user_agent: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_api_url(&self) -> &str {
        &self.base_api_url
    }

    async fn get(&self, url: &Url) -> Result<Value, Error> {
        let resp = self
            .http
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Failed to get resource {}: {}", url, e);
                Error::RequestFailed(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::debug!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        if !status.is_success() {
            let error_object = ErrorObject::from_body(&body);
            if status == reqwest::StatusCode::NOT_FOUND {
                let details = error_object
                    .map(|obj| obj.details)
                    .unwrap_or_else(|| truncate_body(&body));
                tracing::debug!("No match for {}: {}", url, details);
                return Err(Error::NotFound { details });
            }

            let snippet = match error_object {
                Some(obj) => obj.details,
                None => truncate_body(&body),
            };
            tracing::debug!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::debug!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(e.to_string())
        })
    }

    /// Fetches the raw card object matching `query`.
    pub async fn get_named_card(&self, query: &NamedQuery) -> Result<Value, Error> {
        let url = query.to_url(&self.base_api_url)?;
        self.get(&url).await
    }
}

impl FetchJson for Client {
    fn base_url(&self) -> &str {
        &self.base_api_url
    }

    async fn fetch_json(&self, url: &Url) -> Result<Value, Error> {
        self.get(url).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn client_creation_with_defaults() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_api_url(), DEFAULT_BASE_URL);
        assert_eq!(FetchJson::base_url(&client), DEFAULT_BASE_URL);
    }

    #[test]
    fn client_creation_trims_trailing_slash() {
        let client = Client::with_base_url("http://localhost:1234/").unwrap();
        assert_eq!(client.base_api_url(), "http://localhost:1234");
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "û".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() < body.len());
    }

    #[tokio::test]
    #[traced_test]
    async fn failed_request_is_returned_not_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/named"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri()).unwrap();
        let result = client.get_named_card(&NamedQuery::exact("Shock")).await;

        assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
        assert!(!logs_contain("ERROR"));
        assert!(!logs_contain("WARN"));
        assert!(logs_contain("Request failed with status 500"));
    }
}
