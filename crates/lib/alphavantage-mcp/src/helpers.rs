use std::borrow::Cow;

use alphavantage_core::{ErrorKind, GatewayError};
use rmcp::ErrorData;
use rmcp::model::ErrorCode;
use serde_json::json;

fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

/// Maps a gateway failure to an MCP error carrying `kind` and `retryable` as data.
pub fn map_gateway_err(err: &GatewayError) -> ErrorData {
    let kind = err.kind();
    let code = match kind {
        ErrorKind::UnknownTool => ErrorCode::RESOURCE_NOT_FOUND,
        ErrorKind::MissingParameter
        | ErrorKind::InvalidParameterValue
        | ErrorKind::InapplicableParameter => ErrorCode::INVALID_PARAMS,
        ErrorKind::InvalidUpstreamParameter
        | ErrorKind::UpstreamRateLimited
        | ErrorKind::UpstreamAuthenticationFailed
        | ErrorKind::UpstreamUnavailable
        | ErrorKind::UpstreamMalformedResponse
        | ErrorKind::Cancelled => ErrorCode::INTERNAL_ERROR,
    };
    let mut data = json!({
        "kind": kind,
        "retryable": err.is_retryable(),
    });
    if let Some(parameter) = err.parameter() {
        data["parameter"] = json!(parameter);
    }
    ErrorData {
        data: Some(data),
        ..mcp_err(code, err.to_string())
    }
}
