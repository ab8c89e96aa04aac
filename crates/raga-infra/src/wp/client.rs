//! Fetch adapter for the remote content API.
//!
//! One contract: a request either yields parsed JSON or `None`. Transport
//! failures, non-2xx statuses, empty bodies, and parse failures all collapse
//! into the same `None` signal so callers can apply their fallback policy
//! without distinguishing causes.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("RagaMagazine/", env!("CARGO_PKG_VERSION"));

/// Per-request options. `timeout` overrides the client default; headers are
/// appended to the request as-is.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

/// The fetch boundary, kept as a trait so listing logic can be exercised
/// against a stub upstream in tests.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `path` (relative to the configured base, or absolute) and
    /// parse the body as JSON. Never fails; any trouble yields `None`.
    async fn fetch_json(&self, path: &str, options: &FetchOptions) -> Option<Value>;
}

/// HTTP client against a WordPress-compatible REST API.
pub struct WpClient {
    base_url: String,
    http: reqwest::Client,
}

impl WpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client (system error)"),
        }
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl Fetcher for WpClient {
    async fn fetch_json(&self, path: &str, options: &FetchOptions) -> Option<Value> {
        let url = self.url_for(path);

        let mut request = self.http.get(&url);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                // Network-level trouble (DNS, timeout, reset) is worth a log
                // line; soft HTTP failures below are expected and are not.
                tracing::warn!(url = %url, error = %e, "content fetch failed at transport level");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = %status, "content fetch returned non-success");
            return None;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "content fetch body read failed");
                return None;
            }
        };

        if body.trim().is_empty() {
            return None;
        }

        match serde_json::from_str(&body) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::debug!(url = %url, "content fetch body was not valid JSON");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_the_base() {
        let client = WpClient::new("https://cms.example.com/wp-json/");
        assert_eq!(
            client.url_for("/wp/v2/posts"),
            "https://cms.example.com/wp-json/wp/v2/posts"
        );
        assert_eq!(
            client.url_for("wp/v2/tags"),
            "https://cms.example.com/wp-json/wp/v2/tags"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let client = WpClient::new("https://cms.example.com/wp-json");
        assert_eq!(
            client.url_for("https://other.example.com/feed.json"),
            "https://other.example.com/feed.json"
        );
    }
}
