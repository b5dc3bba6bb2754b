//! Maps provider outcomes onto [`GatewayError`] and verifies success payloads.

use alphavantage_schema::models::ResponseShape;
use alphavantage_schema::schema::{
    META_DATA_KEY,
    PROVIDER_ERROR_KEY,
    PROVIDER_INFORMATION_KEY,
    PROVIDER_NOTE_KEY,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::GatewayError;
use crate::upstream::UpstreamFailure;

const RATE_LIMIT_MARKERS: &[&str] = &[
    "rate limit",
    "call frequency",
    "calls per minute",
    "calls per day",
    "requests per day",
    "requests per minute",
    "spreading out your free api requests",
];

const AUTH_MARKERS: &[&str] = &[
    "apikey",
    "api key",
    "premium",
    "subscription",
    "demo api key",
    "demo purposes",
];

/// Provider response that passed classification, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Payload {
    body: Value,
    #[serde(skip)]
    shape: ResponseShape,
}

impl Payload {
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }

    /// The `Meta Data` block of series responses.
    #[must_use]
    pub fn meta_data(&self) -> Option<&Value> {
        self.body.get(META_DATA_KEY)
    }

    /// The data part: the series, the keyed table, or the whole document.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        match self.shape {
            ResponseShape::Series => self
                .body
                .as_object()
                .and_then(|object| series_entry(object).map(|(_, value)| value)),
            ResponseShape::Keyed(key) => self.body.get(key),
            ResponseShape::Document => Some(&self.body),
        }
    }
}

/// Classifies one upstream outcome for an endpoint of the given shape.
///
/// # Errors
/// Returns the matching `Upstream*` or `InvalidUpstreamParameter` variant.
pub fn classify(
    shape: ResponseShape,
    outcome: Result<Value, UpstreamFailure>,
) -> Result<Payload, GatewayError> {
    let body = outcome.map_err(|failure| classify_failure(&failure))?;

    if let Some(message) = provider_message(&body, PROVIDER_ERROR_KEY) {
        return Err(classify_message(message).unwrap_or_else(|| {
            GatewayError::InvalidUpstreamParameter(message.to_string())
        }));
    }

    if let Err(reason) = verify_shape(shape, &body) {
        // Notes next to a well-formed payload are informational; alone they explain the gap.
        let notice = provider_message(&body, PROVIDER_NOTE_KEY)
            .or_else(|| provider_message(&body, PROVIDER_INFORMATION_KEY));
        return Err(notice.map_or_else(
            || GatewayError::UpstreamMalformedResponse(reason),
            |message| {
                classify_message(message).unwrap_or_else(|| {
                    GatewayError::UpstreamMalformedResponse(message.to_string())
                })
            },
        ));
    }

    Ok(Payload { body, shape })
}

fn classify_failure(failure: &UpstreamFailure) -> GatewayError {
    match failure {
        UpstreamFailure::Timeout(_) | UpstreamFailure::Connect(_) | UpstreamFailure::Transport(_) => {
            GatewayError::UpstreamUnavailable(failure.to_string())
        }
        UpstreamFailure::Status { status, .. } => match *status {
            429 => GatewayError::UpstreamRateLimited(failure.to_string()),
            401 | 403 => GatewayError::UpstreamAuthenticationFailed(failure.to_string()),
            400..=499 => GatewayError::InvalidUpstreamParameter(failure.to_string()),
            _ => GatewayError::UpstreamUnavailable(failure.to_string()),
        },
        UpstreamFailure::Decode(_) => GatewayError::UpstreamMalformedResponse(failure.to_string()),
    }
}

/// Rate-limit wording wins: the provider's quota notice also mentions the API key.
fn classify_message(message: &str) -> Option<GatewayError> {
    let lowered = message.to_ascii_lowercase();
    if RATE_LIMIT_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        Some(GatewayError::UpstreamRateLimited(message.to_string()))
    } else if AUTH_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        Some(GatewayError::UpstreamAuthenticationFailed(message.to_string()))
    } else {
        None
    }
}

fn provider_message<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}

fn series_entry(object: &serde_json::Map<String, Value>) -> Option<(&String, &Value)> {
    object
        .iter()
        .find(|(key, value)| key.as_str() != META_DATA_KEY && (value.is_object() || value.is_array()))
}

fn verify_shape(shape: ResponseShape, body: &Value) -> Result<(), String> {
    match shape {
        ResponseShape::Series => {
            let object = body
                .as_object()
                .ok_or_else(|| "expected a JSON object".to_string())?;
            if !object.contains_key(META_DATA_KEY) {
                return Err(format!("missing '{META_DATA_KEY}'"));
            }
            series_entry(object)
                .map(|_| ())
                .ok_or_else(|| "missing data series".to_string())
        }
        ResponseShape::Keyed(key) => {
            if body.get(key).is_some() {
                Ok(())
            } else {
                Err(format!("missing '{key}'"))
            }
        }
        ResponseShape::Document => match body {
            Value::Object(object) if !object.is_empty() => Ok(()),
            Value::Array(items) if !items.is_empty() => Ok(()),
            _ => Err("empty response".to_string()),
        },
    }
}
