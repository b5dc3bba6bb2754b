pub const INTERVALS_INTRADAY: &[&str] = &["1min", "5min", "15min", "30min", "60min"];
pub const INTERVALS_INDICATOR: &[&str] = &[
    "1min", "5min", "15min", "30min", "60min", "daily", "weekly", "monthly",
];
pub const INTERVALS_DAILY_WEEKLY_MONTHLY: &[&str] = &["daily", "weekly", "monthly"];
pub const INTERVALS_MONTHLY_QUARTERLY_ANNUAL: &[&str] = &["monthly", "quarterly", "annual"];
pub const INTERVALS_QUARTERLY_ANNUAL: &[&str] = &["quarterly", "annual"];
pub const INTERVALS_MONTHLY_SEMIANNUAL: &[&str] = &["monthly", "semiannual"];

pub const SERIES_TYPES: &[&str] = &["close", "open", "high", "low"];
pub const OUTPUT_SIZES: &[&str] = &["compact", "full"];
pub const ENTITLEMENTS: &[&str] = &["realtime", "delayed"];
pub const BOOLEAN_FLAGS: &[&str] = &["true", "false"];
pub const TREASURY_MATURITIES: &[&str] = &["3month", "2year", "5year", "7year", "10year", "30year"];
pub const NEWS_SORT_ORDERS: &[&str] = &["LATEST", "EARLIEST", "RELEVANCE"];

pub const NEWS_LIMIT_MAX: i64 = 1000;

/// Earliest trading session served by the historical options endpoint.
pub const HISTORICAL_OPTIONS_EARLIEST: &str = "2008-01-01";

/// Metadata key carried by series-shaped provider responses.
pub const META_DATA_KEY: &str = "Meta Data";

/// Keys the provider uses to report problems in an otherwise successful response.
pub const PROVIDER_ERROR_KEY: &str = "Error Message";
pub const PROVIDER_NOTE_KEY: &str = "Note";
pub const PROVIDER_INFORMATION_KEY: &str = "Information";

#[must_use]
pub fn is_intraday_interval(value: &str) -> bool {
    INTERVALS_INTRADAY.contains(&value)
}
