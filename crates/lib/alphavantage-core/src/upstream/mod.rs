//! Contract between the gateway and the market-data provider.

mod http;

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use alphavantage_schema::models::Family;
use serde_json::Value;

pub use http::{AlphaVantageHttpClient, DEFAULT_BASE_URL, HttpClientConfig};

pub type UpstreamFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Value, UpstreamFailure>> + Send + 'a>>;

/// One outbound provider call, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamQuery {
    pub family: Family,
    /// Provider `function` selector, for example `TIME_SERIES_DAILY`.
    pub function: &'static str,
    /// Query parameters in schema order; parameters left to the provider are absent.
    pub params: Vec<(&'static str, String)>,
}

impl UpstreamQuery {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Transport-level failure reported by an [`UpstreamClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamFailure {
    Timeout(String),
    Connect(String),
    /// Non-success HTTP status with whatever body text came back.
    Status { status: u16, message: String },
    /// Body was not valid JSON.
    Decode(String),
    Transport(String),
}

impl fmt::Display for UpstreamFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout(message) => write!(f, "request timed out: {message}"),
            Self::Connect(message) => write!(f, "connection failed: {message}"),
            Self::Status { status, message } => write!(f, "HTTP {status}: {message}"),
            Self::Decode(message) => write!(f, "invalid response body: {message}"),
            Self::Transport(message) => write!(f, "request failed: {message}"),
        }
    }
}

impl Error for UpstreamFailure {}

/// Provider client shared by every invocation.
///
/// Implementations must return the decoded JSON body unchanged; interpreting
/// in-band provider messages is left to the classifier.
pub trait UpstreamClient: Send + Sync {
    fn execute<'a>(&'a self, query: &'a UpstreamQuery) -> UpstreamFuture<'a>;
}
