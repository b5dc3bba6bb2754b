use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::is_intraday_interval;

/// Provider subsystem an endpoint is served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    TimeSeries,
    Fundamentals,
    TechnicalIndicator,
    Commodity,
    Forex,
    Crypto,
    Macro,
    News,
    Options,
}

impl Family {
    pub const ALL: [Self; 9] = [
        Self::TimeSeries,
        Self::Fundamentals,
        Self::TechnicalIndicator,
        Self::Commodity,
        Self::Forex,
        Self::Crypto,
        Self::Macro,
        Self::News,
        Self::Options,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TimeSeries => "time_series",
            Self::Fundamentals => "fundamentals",
            Self::TechnicalIndicator => "technical_indicator",
            Self::Commodity => "commodity",
            Self::Forex => "forex",
            Self::Crypto => "crypto",
            Self::Macro => "macro",
            Self::News => "news",
            Self::Options => "options",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexical pattern accepted by a date-like string parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY-MM-DD`
    Day,
    /// `YYYYMMDDTHHMM`
    Minute,
}

impl DateFormat {
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::YearMonth => "YYYY-MM",
            Self::Day => "YYYY-MM-DD",
            Self::Minute => "YYYYMMDDTHHMM",
        }
    }

    /// Regular expression equivalent of [`DateFormat::pattern`], for JSON Schema output.
    #[must_use]
    pub const fn regex(self) -> &'static str {
        match self {
            Self::YearMonth => r"^\d\d\d\d-\d\d$",
            Self::Day => r"^\d\d\d\d-\d\d-\d\d$",
            Self::Minute => r"^\d\d\d\d\d\d\d\dT\d\d\d\d$",
        }
    }
}

/// Type and shape rule for a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    /// Enumerated strings; matching is case-insensitive, the declared spelling is canonical.
    Choice(&'static [&'static str]),
    /// Moving-average type: integer code 0-8 or its alias (`SMA`, `EMA`, ...).
    MovingAverage,
    Integer { min: i64, max: i64 },
    Float { positive: bool },
    /// Date-like string; `earliest` is an inclusive lower bound in the same format.
    Date {
        format: DateFormat,
        earliest: Option<&'static str>,
    },
}

impl ParamKind {
    pub const POSITIVE_INTEGER: Self = Self::Integer { min: 1, max: i64::MAX };
    pub const POSITIVE_FLOAT: Self = Self::Float { positive: true };

    #[must_use]
    pub const fn date(format: DateFormat) -> Self {
        Self::Date {
            format,
            earliest: None,
        }
    }

    #[must_use]
    pub const fn date_since(format: DateFormat, earliest: &'static str) -> Self {
        Self::Date {
            format,
            earliest: Some(earliest),
        }
    }

    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Choice(_) | Self::MovingAverage)
    }
}

/// Value used when the caller omits an optional parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    /// Leave the parameter out of the upstream query and let the provider decide.
    Unset,
    Text(&'static str),
    Integer(i64),
    Float(f64),
}

/// Condition under which a supplied parameter is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    Always,
    /// Only when the resolved `interval` is an intraday granularity.
    IntradayInterval,
}

impl Applicability {
    /// Evaluates the condition against the resolved `interval`, if any.
    #[must_use]
    pub fn holds(self, interval: Option<&str>) -> bool {
        match self {
            Self::Always => true,
            Self::IntradayInterval => interval.is_some_and(is_intraday_interval),
        }
    }
}

/// Contract for one named parameter of a tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub default: ParamDefault,
    pub applicability: Applicability,
    pub description: &'static str,
}

impl ParamSpec {
    #[must_use]
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: ParamDefault::Unset,
            applicability: Applicability::Always,
            description,
        }
    }

    #[must_use]
    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: ParamDefault::Unset,
            applicability: Applicability::Always,
            description,
        }
    }

    #[must_use]
    pub const fn with_default(mut self, default: ParamDefault) -> Self {
        self.default = default;
        self
    }

    #[must_use]
    pub const fn only_when(mut self, applicability: Applicability) -> Self {
        self.applicability = applicability;
        self
    }
}

/// Structure a successful provider response is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `Meta Data` plus one keyed series.
    Series,
    /// A single table under the given key.
    Keyed(&'static str),
    /// Any non-empty JSON document.
    Document,
}

/// Declarative description of one tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointSchema {
    pub name: &'static str,
    pub family: Family,
    pub function: &'static str,
    pub shape: ResponseShape,
    pub description: &'static str,
    pub parameters: &'static [ParamSpec],
}

impl EndpointSchema {
    #[must_use]
    pub const fn new(
        name: &'static str,
        family: Family,
        function: &'static str,
        shape: ResponseShape,
        description: &'static str,
        parameters: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            family,
            function,
            shape,
            description,
            parameters,
        }
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParamSpec> {
        self.parameters.iter().find(|spec| spec.name == name)
    }

    #[must_use]
    pub fn required_parameters(&self) -> impl Iterator<Item = &ParamSpec> {
        self.parameters.iter().filter(|spec| spec.required)
    }
}

/// Moving-average types accepted by `matype`-style parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovingAverageType {
    Sma,
    Ema,
    Wma,
    Dema,
    Tema,
    Trima,
    T3,
    Kama,
    Mama,
}

impl MovingAverageType {
    pub const ALL: [Self; 9] = [
        Self::Sma,
        Self::Ema,
        Self::Wma,
        Self::Dema,
        Self::Tema,
        Self::Trima,
        Self::T3,
        Self::Kama,
        Self::Mama,
    ];

    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Sma => 0,
            Self::Ema => 1,
            Self::Wma => 2,
            Self::Dema => 3,
            Self::Tema => 4,
            Self::Trima => 5,
            Self::T3 => 6,
            Self::Kama => 7,
            Self::Mama => 8,
        }
    }

    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::Sma => "SMA",
            Self::Ema => "EMA",
            Self::Wma => "WMA",
            Self::Dema => "DEMA",
            Self::Tema => "TEMA",
            Self::Trima => "TRIMA",
            Self::T3 => "T3",
            Self::Kama => "KAMA",
            Self::Mama => "MAMA",
        }
    }

    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    #[must_use]
    pub fn from_alias(alias: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.alias().eq_ignore_ascii_case(alias))
    }
}

impl fmt::Display for MovingAverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_average_codes_and_aliases_agree() {
        for kind in MovingAverageType::ALL {
            assert_eq!(MovingAverageType::from_code(kind.code()), Some(kind));
            assert_eq!(MovingAverageType::from_alias(kind.alias()), Some(kind));
        }
        assert_eq!(MovingAverageType::from_alias("ema"), Some(MovingAverageType::Ema));
        assert_eq!(MovingAverageType::from_code(9), None);
        assert_eq!(MovingAverageType::from_alias("HMA"), None);
    }

    #[test]
    fn intraday_condition_requires_intraday_interval() {
        let condition = Applicability::IntradayInterval;
        assert!(condition.holds(Some("5min")));
        assert!(!condition.holds(Some("monthly")));
        assert!(!condition.holds(None));
        assert!(Applicability::Always.holds(None));
    }

    #[test]
    fn family_serializes_snake_case() {
        let encoded = serde_json::to_string(&Family::TechnicalIndicator).unwrap();
        assert_eq!(encoded, "\"technical_indicator\"");
        assert_eq!(Family::TechnicalIndicator.to_string(), "technical_indicator");
    }
}
