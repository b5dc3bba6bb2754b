//! Validation and canonicalisation of caller-supplied tool arguments.

use std::fmt;

use alphavantage_schema::models::{
    DateFormat,
    EndpointSchema,
    MovingAverageType,
    ParamDefault,
    ParamKind,
    ParamSpec,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::GatewayError;

/// One tool call as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub tool_name: String,
    pub arguments: Map<String, Value>,
}

impl InvocationRequest {
    #[must_use]
    pub fn new(tool_name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }

    /// Builds a request from a JSON value; anything but an object counts as no arguments.
    #[must_use]
    pub fn from_value(tool_name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(tool_name, arguments)
    }
}

/// Canonical typed value of a normalized parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl ParamValue {
    /// Text form sent in the provider query string.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_value())
    }
}

/// How a declared parameter obtained its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Resolved {
    Supplied(ParamValue),
    Defaulted(ParamValue),
    /// Left out of the upstream query so the provider applies its own default.
    Omitted,
}

impl Resolved {
    #[must_use]
    pub const fn value(&self) -> Option<&ParamValue> {
        match self {
            Self::Supplied(value) | Self::Defaulted(value) => Some(value),
            Self::Omitted => None,
        }
    }

    #[must_use]
    pub const fn is_supplied(&self) -> bool {
        matches!(self, Self::Supplied(_))
    }
}

/// One entry per declared parameter, in schema order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NormalizedParams {
    entries: Vec<(&'static str, Resolved)>,
}

impl NormalizedParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Resolved> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, resolved)| resolved)
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<&ParamValue> {
        self.get(name).and_then(Resolved::value)
    }

    /// Every declared parameter with its resolution, in schema order.
    #[must_use]
    pub const fn entries(&self) -> &[(&'static str, Resolved)] {
        self.entries.as_slice()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Query pairs for every parameter that carries a value; omitted ones are skipped.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.entries
            .iter()
            .filter_map(|(name, resolved)| {
                resolved.value().map(|value| (*name, value.to_query_value()))
            })
            .collect()
    }

    fn interval(&self) -> Option<&str> {
        match self.value("interval") {
            Some(ParamValue::Text(interval)) => Some(interval.as_str()),
            _ => None,
        }
    }
}

/// Normalizes `arguments` against `schema`, stopping at the first violation.
///
/// # Errors
/// Returns `InapplicableParameter` for undeclared arguments or arguments whose
/// condition does not hold, `MissingParameter` for absent required ones and
/// `InvalidParameterValue` for values that do not fit the declared kind.
pub fn normalize(
    schema: &EndpointSchema,
    arguments: &Map<String, Value>,
) -> Result<NormalizedParams, GatewayError> {
    if let Some(name) = arguments
        .iter()
        .find(|(name, value)| supplied(value).is_some() && schema.parameter(name).is_none())
        .map(|(name, _)| name)
    {
        return Err(GatewayError::inapplicable(
            schema.name,
            name,
            "the tool does not declare this parameter",
        ));
    }

    let mut normalized = NormalizedParams {
        entries: Vec::with_capacity(schema.parameters.len()),
    };
    for spec in schema.parameters {
        let resolved = match arguments.get(spec.name).and_then(supplied) {
            Some(raw) => {
                let value = coerce(spec, raw)
                    .map_err(|reason| GatewayError::invalid(schema.name, spec.name, reason))?;
                let interval = normalized.interval();
                if !spec.applicability.holds(interval) {
                    return Err(GatewayError::inapplicable(
                        schema.name,
                        spec.name,
                        format!(
                            "only valid with an intraday interval, got '{}'",
                            interval.unwrap_or("none")
                        ),
                    ));
                }
                Resolved::Supplied(value)
            }
            None if spec.required => return Err(GatewayError::missing(schema.name, spec.name)),
            None => default_for(spec),
        };
        normalized.entries.push((spec.name, resolved));
    }
    Ok(normalized)
}

/// Treats `null` and blank strings as absent.
fn supplied(value: &Value) -> Option<&Value> {
    match value {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        other => Some(other),
    }
}

fn default_for(spec: &ParamSpec) -> Resolved {
    match spec.default {
        ParamDefault::Unset => Resolved::Omitted,
        ParamDefault::Text(value) => Resolved::Defaulted(ParamValue::Text(value.to_string())),
        ParamDefault::Integer(value) => Resolved::Defaulted(ParamValue::Integer(value)),
        ParamDefault::Float(value) => Resolved::Defaulted(ParamValue::Float(value)),
    }
}

fn coerce(spec: &ParamSpec, raw: &Value) -> Result<ParamValue, String> {
    match spec.kind {
        ParamKind::Text => scalar_text(raw)
            .map(|text| ParamValue::Text(text.trim().to_string()))
            .ok_or_else(|| format!("expected a string, got {}", describe(raw))),
        ParamKind::Choice(allowed) => coerce_choice(allowed, raw),
        ParamKind::MovingAverage => coerce_moving_average(raw),
        ParamKind::Integer { min, max } => coerce_integer(raw, min, max),
        ParamKind::Float { positive } => coerce_float(raw, positive),
        ParamKind::Date { format, earliest } => coerce_date(raw, format, earliest),
    }
}

fn scalar_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn coerce_choice(allowed: &'static [&'static str], raw: &Value) -> Result<ParamValue, String> {
    let candidate = match raw {
        Value::Bool(flag) => Some(flag.to_string()),
        other => scalar_text(other),
    }
    .map(|text| text.trim().to_string());

    let matched = candidate.as_deref().and_then(|candidate| {
        allowed
            .iter()
            .find(|value| **value == candidate)
            .or_else(|| {
                allowed
                    .iter()
                    .find(|value| value.eq_ignore_ascii_case(candidate))
            })
    });

    matched
        .map(|value| ParamValue::Text((*value).to_string()))
        .ok_or_else(|| {
            format!(
                "{} is not one of {}",
                describe(raw),
                allowed.join("|")
            )
        })
}

fn coerce_moving_average(raw: &Value) -> Result<ParamValue, String> {
    let kind = match raw {
        Value::Number(number) => number.as_i64().and_then(MovingAverageType::from_code),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .map_or_else(|| MovingAverageType::from_alias(text), MovingAverageType::from_code)
        }
        _ => None,
    };
    kind.map(|kind| ParamValue::Integer(kind.code())).ok_or_else(|| {
        let aliases: Vec<&str> = MovingAverageType::ALL
            .iter()
            .map(|kind| kind.alias())
            .collect();
        format!(
            "{} is not a moving-average type (0-8 or {})",
            describe(raw),
            aliases.join("|")
        )
    })
}

fn coerce_integer(raw: &Value, min: i64, max: i64) -> Result<ParamValue, String> {
    let value = match raw {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| format!("expected an integer, got {}", describe(raw)))?;

    if (min..=max).contains(&value) {
        Ok(ParamValue::Integer(value))
    } else if max == i64::MAX {
        Err(format!("{value} must be at least {min}"))
    } else {
        Err(format!("{value} must be between {min} and {max}"))
    }
}

fn coerce_float(raw: &Value, positive: bool) -> Result<ParamValue, String> {
    let value = match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|value| value.is_finite())
    .ok_or_else(|| format!("expected a number, got {}", describe(raw)))?;

    if positive && value <= 0.0 {
        return Err(format!("{value} must be positive"));
    }
    Ok(ParamValue::Float(value))
}

fn coerce_date(
    raw: &Value,
    format: DateFormat,
    earliest: Option<&'static str>,
) -> Result<ParamValue, String> {
    let Value::String(text) = raw else {
        return Err(format!("expected a {} string, got {}", format.pattern(), describe(raw)));
    };
    let text = text.trim();
    if !matches_pattern(text, format.pattern()) || !is_calendar_valid(text, format) {
        return Err(format!("'{text}' does not match {}", format.pattern()));
    }
    // Fixed-width formats compare chronologically as strings.
    if let Some(earliest) = earliest
        && text < earliest
    {
        return Err(format!("'{text}' is before {earliest}"));
    }
    Ok(ParamValue::Text(text.to_string()))
}

/// Letters of the pattern other than `T` stand for one ASCII digit.
fn matches_pattern(value: &str, pattern: &str) -> bool {
    value.len() == pattern.len()
        && value.chars().zip(pattern.chars()).all(|(actual, expected)| {
            if expected.is_ascii_alphabetic() && expected != 'T' {
                actual.is_ascii_digit()
            } else {
                actual == expected
            }
        })
}

fn is_calendar_valid(value: &str, format: DateFormat) -> bool {
    match format {
        DateFormat::YearMonth => NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").is_ok(),
        DateFormat::Day => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        DateFormat::Minute => NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M").is_ok(),
    }
}

fn describe(raw: &Value) -> String {
    match raw {
        Value::String(text) => format!("'{text}'"),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::ToolRegistry;

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("arguments must be an object"),
        }
    }

    fn run(tool: &str, value: Value) -> Result<NormalizedParams, GatewayError> {
        let registry = ToolRegistry::builtin().unwrap();
        normalize(registry.lookup(tool).unwrap(), &args(value))
    }

    #[test]
    fn intraday_defaults_and_omissions() {
        let params = run(
            "get_intraday",
            json!({"symbol": "IBM", "interval": "5min", "outputsize": "compact"}),
        )
        .unwrap();
        assert_eq!(
            params.get("symbol"),
            Some(&Resolved::Supplied(ParamValue::Text("IBM".into())))
        );
        assert_eq!(params.get("month"), Some(&Resolved::Omitted));
        assert_eq!(params.get("entitlement"), Some(&Resolved::Omitted));
        assert_eq!(
            params.get("extended_hours"),
            Some(&Resolved::Defaulted(ParamValue::Text("true".into())))
        );
        assert_eq!(
            params.get("adjusted"),
            Some(&Resolved::Defaulted(ParamValue::Text("true".into())))
        );
        assert_eq!(params.len(), 7);
    }

    #[test]
    fn matype_code_and_alias_agree() {
        let by_code = run("get_bbands", json!({"symbol": "AAPL", "matype": 1})).unwrap();
        let by_alias = run("get_bbands", json!({"symbol": "AAPL", "matype": "ema"})).unwrap();
        let by_text_code = run("get_bbands", json!({"symbol": "AAPL", "matype": "1"})).unwrap();
        assert_eq!(by_code, by_alias);
        assert_eq!(by_code, by_text_code);
        assert_eq!(by_code.value("matype"), Some(&ParamValue::Integer(1)));
    }

    #[test]
    fn zero_matype_is_a_value_not_an_absence() {
        let params = run("get_bbands", json!({"symbol": "AAPL", "matype": 0})).unwrap();
        assert_eq!(params.get("matype"), Some(&Resolved::Supplied(ParamValue::Integer(0))));
        let params = run("get_bbands", json!({"symbol": "AAPL"})).unwrap();
        assert_eq!(params.get("matype"), Some(&Resolved::Omitted));
    }

    #[test]
    fn out_of_range_matype_is_invalid() {
        let err = run("get_bbands", json!({"symbol": "AAPL", "matype": 99})).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidParameterValue { ref parameter, .. } if parameter == "matype"));
    }

    #[test]
    fn month_requires_intraday_interval() {
        let err = run(
            "get_sma",
            json!({"symbol": "IBM", "interval": "monthly", "month": "2024-01"}),
        )
        .unwrap_err();
        assert!(matches!(err, GatewayError::InapplicableParameter { ref parameter, .. } if parameter == "month"));

        // The default indicator interval is daily, so month alone is also inapplicable.
        let err = run("get_sma", json!({"symbol": "IBM", "month": "2024-01"})).unwrap_err();
        assert!(matches!(err, GatewayError::InapplicableParameter { .. }));

        let params = run(
            "get_sma",
            json!({"symbol": "IBM", "interval": "15min", "month": "2024-01"}),
        )
        .unwrap();
        assert_eq!(params.value("month"), Some(&ParamValue::Text("2024-01".into())));
    }

    #[test]
    fn undeclared_arguments_are_inapplicable() {
        let err = run("get_rsi", json!({"symbol": "IBM", "outputsize": "full"})).unwrap_err();
        assert!(matches!(err, GatewayError::InapplicableParameter { ref parameter, .. } if parameter == "outputsize"));

        let err = run(
            "get_currency_exchange_daily",
            json!({"from_symbol": "EUR", "to_symbol": "USD", "entitlement": "delayed"}),
        )
        .unwrap_err();
        assert_eq!(err.parameter(), Some("entitlement"));

        // Null for an undeclared name is tolerated.
        assert!(run("get_rsi", json!({"symbol": "IBM", "outputsize": null})).is_ok());
    }

    #[test]
    fn missing_required_parameter() {
        let err = run("get_daily", json!({"outputsize": "full"})).unwrap_err();
        assert_eq!(err, GatewayError::missing("get_daily", "symbol"));

        let err = run("get_daily", json!({"symbol": "   "})).unwrap_err();
        assert_eq!(err.parameter(), Some("symbol"));

        let err = run("get_crypto_intraday", json!({"symbol": "ETH", "market": "USD"})).unwrap_err();
        assert_eq!(err, GatewayError::missing("get_crypto_intraday", "interval"));
    }

    #[test]
    fn enum_values_are_canonicalised() {
        let params = run("get_daily", json!({"symbol": "IBM", "outputsize": "FULL"})).unwrap();
        assert_eq!(params.value("outputsize"), Some(&ParamValue::Text("full".into())));

        let params = run(
            "get_intraday",
            json!({"symbol": "IBM", "extended_hours": false}),
        )
        .unwrap();
        assert_eq!(params.value("extended_hours"), Some(&ParamValue::Text("false".into())));

        let err = run("get_daily", json!({"symbol": "IBM", "outputsize": "huge"})).unwrap_err();
        assert!(err.to_string().contains("compact|full"));
    }

    #[test]
    fn vwap_accepts_only_intraday_intervals() {
        assert!(run("get_vwap", json!({"symbol": "IBM", "interval": "5min"})).is_ok());
        let err = run("get_vwap", json!({"symbol": "IBM", "interval": "daily"})).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidParameterValue { .. }));
    }

    #[test]
    fn integers_and_floats_are_checked() {
        let params = run("get_sma", json!({"symbol": "IBM", "time_period": "60"})).unwrap();
        assert_eq!(params.value("time_period"), Some(&ParamValue::Integer(60)));
        assert!(run("get_sma", json!({"symbol": "IBM", "time_period": 0})).is_err());
        assert!(run("get_sma", json!({"symbol": "IBM", "time_period": 2.5})).is_err());

        let params = run(
            "get_sar",
            json!({"symbol": "IBM", "acceleration": "0.05", "maximum": 0.25}),
        )
        .unwrap();
        assert_eq!(params.value("acceleration"), Some(&ParamValue::Float(0.05)));
        assert!(run("get_sar", json!({"symbol": "IBM", "acceleration": -0.1})).is_err());
        assert!(run("get_sar", json!({"symbol": "IBM", "maximum": "NaN"})).is_err());
    }

    #[test]
    fn news_bounds_and_limits() {
        let params = run(
            "get_news_sentiment",
            json!({"tickers": "AAPL", "time_from": "20240101T0930"}),
        )
        .unwrap();
        assert_eq!(params.value("limit"), Some(&ParamValue::Integer(50)));
        assert_eq!(params.value("sort"), Some(&ParamValue::Text("LATEST".into())));

        assert!(run("get_news_sentiment", json!({"time_from": "2024-01-01"})).is_err());
        assert!(run("get_news_sentiment", json!({"time_to": "20241341T0000"})).is_err());
        assert!(run("get_news_sentiment", json!({"limit": 1001})).is_err());
        assert!(run("get_news_sentiment", json!({"sort": "relevance"})).is_ok());
    }

    #[test]
    fn historical_options_date_floor() {
        assert!(run("get_historical_options", json!({"symbol": "IBM", "date": "2017-11-15"})).is_ok());
        let err = run("get_historical_options", json!({"symbol": "IBM", "date": "2007-12-31"})).unwrap_err();
        assert!(err.to_string().contains("2008-01-01"));
        assert!(run("get_historical_options", json!({"symbol": "IBM", "date": "2017-02-30"})).is_err());
    }

    #[test]
    fn query_pairs_skip_omitted_values() {
        let params = run("get_intraday", json!({"symbol": "IBM"})).unwrap();
        let pairs = params.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("symbol", "IBM".to_string()),
                ("interval", "15min".to_string()),
                ("outputsize", "compact".to_string()),
                ("extended_hours", "true".to_string()),
                ("adjusted", "true".to_string()),
            ]
        );
    }

    #[test]
    fn text_accepts_numbers() {
        let params = run("get_daily", json!({"symbol": 7203})).unwrap();
        assert_eq!(params.value("symbol"), Some(&ParamValue::Text("7203".into())));
        assert!(run("get_daily", json!({"symbol": ["IBM"]})).is_err());
    }

    #[test]
    fn pattern_matching_is_positional() {
        assert!(matches_pattern("2024-01", "YYYY-MM"));
        assert!(!matches_pattern("2024-1", "YYYY-MM"));
        assert!(matches_pattern("20240101T0930", "YYYYMMDDTHHMM"));
        assert!(!matches_pattern("20240101X0930", "YYYYMMDDTHHMM"));
    }
}
