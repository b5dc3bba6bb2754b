use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use super::{UpstreamClient, UpstreamFailure, UpstreamFuture, UpstreamQuery};

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

const USER_AGENT: &str = concat!("alphavantage-mcp/", env!("CARGO_PKG_VERSION"));
const MAX_ERROR_BODY: usize = 512;

/// Settings for [`AlphaVantageHttpClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl HttpClientConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// `reqwest`-backed provider client issuing one GET per query.
#[derive(Clone)]
pub struct AlphaVantageHttpClient {
    client: Arc<reqwest::Client>,
    config: HttpClientConfig,
}

impl AlphaVantageHttpClient {
    /// Builds the client with its own connection pool.
    ///
    /// # Errors
    /// Returns the underlying `reqwest` error if the TLS backend cannot be initialised.
    pub fn new(config: HttpClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self::with_client(client, config))
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, config: HttpClientConfig) -> Self {
        Self {
            client: Arc::new(client),
            config,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

impl fmt::Debug for AlphaVantageHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageHttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl UpstreamClient for AlphaVantageHttpClient {
    fn execute<'a>(&'a self, query: &'a UpstreamQuery) -> UpstreamFuture<'a> {
        Box::pin(async move {
            let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(query.params.len() + 2);
            pairs.push(("function", query.function));
            pairs.extend(query.params.iter().map(|(name, value)| (*name, value.as_str())));
            pairs.push(("apikey", self.config.api_key.as_str()));

            let response = self
                .client
                .get(&self.config.base_url)
                .query(&pairs)
                .send()
                .await
                .map_err(map_send_error)?;

            let status = response.status();
            let body = response.bytes().await.map_err(map_send_error)?;

            if !status.is_success() {
                return Err(UpstreamFailure::Status {
                    status: status.as_u16(),
                    message: excerpt(&body),
                });
            }

            serde_json::from_slice::<Value>(&body)
                .map_err(|err| UpstreamFailure::Decode(format!("{err}: {}", excerpt(&body))))
        })
    }
}

// reqwest errors embed the request URL, which carries the API key.
fn map_send_error(err: reqwest::Error) -> UpstreamFailure {
    let timeout = err.is_timeout();
    let connect = err.is_connect();
    let message = err.without_url().to_string();
    if timeout {
        UpstreamFailure::Timeout(message)
    } else if connect {
        UpstreamFailure::Connect(message)
    } else {
        UpstreamFailure::Transport(message)
    }
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.len() <= MAX_ERROR_BODY {
        return text.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_api_key() {
        let config = HttpClientConfig::new("secret-key").with_timeout(Duration::from_secs(5));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn excerpt_truncates_on_char_boundary() {
        let body = "é".repeat(400);
        let text = excerpt(body.as_bytes());
        assert!(text.ends_with("..."));
        assert!(text.len() <= MAX_ERROR_BODY + 3);
    }
}
