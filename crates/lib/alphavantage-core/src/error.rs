use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Failure of a single tool invocation.
///
/// The first four variants are raised before any network traffic; the
/// `Upstream*` variants come from classifying the provider's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    UnknownTool(String),
    MissingParameter {
        tool: String,
        parameter: String,
    },
    InvalidParameterValue {
        tool: String,
        parameter: String,
        reason: String,
    },
    InapplicableParameter {
        tool: String,
        parameter: String,
        reason: String,
    },
    /// The provider rejected a value the normalizer accepted.
    InvalidUpstreamParameter(String),
    UpstreamRateLimited(String),
    UpstreamAuthenticationFailed(String),
    UpstreamUnavailable(String),
    UpstreamMalformedResponse(String),
    Cancelled,
}

/// Stable, serialisable discriminant of [`GatewayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnknownTool,
    MissingParameter,
    InvalidParameterValue,
    InapplicableParameter,
    InvalidUpstreamParameter,
    UpstreamRateLimited,
    UpstreamAuthenticationFailed,
    UpstreamUnavailable,
    UpstreamMalformedResponse,
    Cancelled,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownTool => "unknown_tool",
            Self::MissingParameter => "missing_parameter",
            Self::InvalidParameterValue => "invalid_parameter_value",
            Self::InapplicableParameter => "inapplicable_parameter",
            Self::InvalidUpstreamParameter => "invalid_upstream_parameter",
            Self::UpstreamRateLimited => "upstream_rate_limited",
            Self::UpstreamAuthenticationFailed => "upstream_authentication_failed",
            Self::UpstreamUnavailable => "upstream_unavailable",
            Self::UpstreamMalformedResponse => "upstream_malformed_response",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether repeating the same call later may succeed. The gateway itself never retries.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::UpstreamRateLimited | Self::UpstreamUnavailable)
    }

    /// True for failures detected before the upstream call was made.
    #[must_use]
    pub const fn is_caller_error(self) -> bool {
        matches!(
            self,
            Self::UnknownTool
                | Self::MissingParameter
                | Self::InvalidParameterValue
                | Self::InapplicableParameter
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GatewayError {
    pub(crate) fn missing(tool: &str, parameter: &str) -> Self {
        Self::MissingParameter {
            tool: tool.to_string(),
            parameter: parameter.to_string(),
        }
    }

    pub(crate) fn invalid(tool: &str, parameter: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameterValue {
            tool: tool.to_string(),
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn inapplicable(tool: &str, parameter: &str, reason: impl Into<String>) -> Self {
        Self::InapplicableParameter {
            tool: tool.to_string(),
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownTool(_) => ErrorKind::UnknownTool,
            Self::MissingParameter { .. } => ErrorKind::MissingParameter,
            Self::InvalidParameterValue { .. } => ErrorKind::InvalidParameterValue,
            Self::InapplicableParameter { .. } => ErrorKind::InapplicableParameter,
            Self::InvalidUpstreamParameter(_) => ErrorKind::InvalidUpstreamParameter,
            Self::UpstreamRateLimited(_) => ErrorKind::UpstreamRateLimited,
            Self::UpstreamAuthenticationFailed(_) => ErrorKind::UpstreamAuthenticationFailed,
            Self::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            Self::UpstreamMalformedResponse(_) => ErrorKind::UpstreamMalformedResponse,
            Self::Cancelled => ErrorKind::Cancelled,
        }
    }

    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    /// Name of the offending parameter for normalizer failures.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingParameter { parameter, .. }
            | Self::InvalidParameterValue { parameter, .. }
            | Self::InapplicableParameter { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTool(name) => write!(f, "unknown tool: {name}"),
            Self::MissingParameter { tool, parameter } => {
                write!(f, "{tool}: missing required parameter '{parameter}'")
            }
            Self::InvalidParameterValue {
                tool,
                parameter,
                reason,
            } => write!(f, "{tool}: invalid value for '{parameter}': {reason}"),
            Self::InapplicableParameter {
                tool,
                parameter,
                reason,
            } => write!(f, "{tool}: parameter '{parameter}' is not applicable: {reason}"),
            Self::InvalidUpstreamParameter(message) => {
                write!(f, "provider rejected the request: {message}")
            }
            Self::UpstreamRateLimited(message) => write!(f, "provider rate limit reached: {message}"),
            Self::UpstreamAuthenticationFailed(message) => {
                write!(f, "provider authentication failed: {message}")
            }
            Self::UpstreamUnavailable(message) => write!(f, "provider unavailable: {message}"),
            Self::UpstreamMalformedResponse(message) => {
                write!(f, "unexpected provider response: {message}")
            }
            Self::Cancelled => f.write_str("invocation cancelled"),
        }
    }
}

impl Error for GatewayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_quota_and_outage_are_retryable() {
        assert!(GatewayError::UpstreamRateLimited("quota".into()).is_retryable());
        assert!(GatewayError::UpstreamUnavailable("timeout".into()).is_retryable());
        assert!(!GatewayError::UpstreamAuthenticationFailed("key".into()).is_retryable());
        assert!(!GatewayError::UpstreamMalformedResponse("shape".into()).is_retryable());
        assert!(!GatewayError::Cancelled.is_retryable());
        assert!(!GatewayError::missing("get_daily", "symbol").is_retryable());
    }

    #[test]
    fn kind_serializes_snake_case() {
        let kind = GatewayError::invalid("get_sma", "interval", "bad").kind();
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"invalid_parameter_value\"");
        assert_eq!(kind.to_string(), "invalid_parameter_value");
        assert!(kind.is_caller_error());
        assert!(!ErrorKind::UpstreamUnavailable.is_caller_error());
    }

    #[test]
    fn display_names_tool_and_parameter() {
        let err = GatewayError::missing("get_daily", "symbol");
        assert_eq!(err.to_string(), "get_daily: missing required parameter 'symbol'");
        assert_eq!(err.parameter(), Some("symbol"));
        assert_eq!(GatewayError::Cancelled.parameter(), None);
    }
}
