//! Parameter specs shared across catalog entries.

use alphavantage_schema::models::{Applicability, DateFormat, ParamDefault, ParamKind, ParamSpec};
use alphavantage_schema::schema::{
    BOOLEAN_FLAGS,
    ENTITLEMENTS,
    INTERVALS_INDICATOR,
    INTERVALS_INTRADAY,
    OUTPUT_SIZES,
    SERIES_TYPES,
};

pub const SYMBOL: ParamSpec = ParamSpec::required(
    "symbol",
    ParamKind::Text,
    "Symbol of the equity, for example IBM.",
);

pub const OUTPUTSIZE: ParamSpec = ParamSpec::optional(
    "outputsize",
    ParamKind::Choice(OUTPUT_SIZES),
    "'compact' returns the latest 100 points, 'full' the full-length series.",
)
.with_default(ParamDefault::Text("compact"));

pub const ENTITLEMENT: ParamSpec = ParamSpec::optional(
    "entitlement",
    ParamKind::Choice(ENTITLEMENTS),
    "'realtime' or 15-minute 'delayed' US stock market data. Provider default when unset.",
);

pub const MONTH: ParamSpec = ParamSpec::optional(
    "month",
    ParamKind::date(DateFormat::YearMonth),
    "Calendar month (YYYY-MM) to query. Only applicable to intraday intervals.",
)
.only_when(Applicability::IntradayInterval);

pub const TIME_PERIOD: ParamSpec = ParamSpec::optional(
    "time_period",
    ParamKind::POSITIVE_INTEGER,
    "Number of data points used to calculate each value.",
)
.with_default(ParamDefault::Integer(20));

pub const SERIES_TYPE: ParamSpec = ParamSpec::optional(
    "series_type",
    ParamKind::Choice(SERIES_TYPES),
    "Price type used by the calculation.",
)
.with_default(ParamDefault::Text("close"));

pub const INDICATOR_INTERVAL: ParamSpec = interval(INTERVALS_INDICATOR, "daily");

pub const INTRADAY_INTERVAL: ParamSpec = interval(INTERVALS_INTRADAY, "15min");

pub const EXTENDED_HOURS: ParamSpec = ParamSpec::optional(
    "extended_hours",
    ParamKind::Choice(BOOLEAN_FLAGS),
    "Include pre- and post-market trading hours.",
)
.with_default(ParamDefault::Text("true"));

pub const ADJUSTED: ParamSpec = ParamSpec::optional(
    "adjusted",
    ParamKind::Choice(BOOLEAN_FLAGS),
    "Adjust values for historical split and dividend events.",
)
.with_default(ParamDefault::Text("true"));

pub const FROM_SYMBOL: ParamSpec = ParamSpec::required(
    "from_symbol",
    ParamKind::Text,
    "Source currency code, for example EUR.",
);

pub const TO_SYMBOL: ParamSpec = ParamSpec::required(
    "to_symbol",
    ParamKind::Text,
    "Destination currency code, for example USD.",
);

pub const FROM_CURRENCY: ParamSpec = ParamSpec::required(
    "from_currency",
    ParamKind::Text,
    "Physical or digital currency to convert from, for example USD or BTC.",
);

pub const TO_CURRENCY: ParamSpec = ParamSpec::required(
    "to_currency",
    ParamKind::Text,
    "Physical or digital currency to convert to, for example USD or BTC.",
);

pub const CRYPTO_SYMBOL: ParamSpec = ParamSpec::required(
    "symbol",
    ParamKind::Text,
    "Digital currency symbol, for example BTC.",
);

pub const MARKET: ParamSpec = ParamSpec::required(
    "market",
    ParamKind::Text,
    "Exchange market currency, for example CNY or USD.",
);

/// Interval with a per-endpoint allowed set and default.
pub const fn interval(allowed: &'static [&'static str], default: &'static str) -> ParamSpec {
    ParamSpec::optional(
        "interval",
        ParamKind::Choice(allowed),
        "Time interval between two consecutive data points.",
    )
    .with_default(ParamDefault::Text(default))
}

pub const fn required_interval(allowed: &'static [&'static str]) -> ParamSpec {
    ParamSpec::required(
        "interval",
        ParamKind::Choice(allowed),
        "Time interval between two consecutive data points.",
    )
}

/// Positive integer period left to the provider default when unset.
pub const fn period(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec::optional(name, ParamKind::POSITIVE_INTEGER, description)
}

/// Moving-average type left to the provider default when unset.
pub const fn ma_type(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec::optional(name, ParamKind::MovingAverage, description)
}

pub const fn positive_float(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec::optional(name, ParamKind::POSITIVE_FLOAT, description)
}
