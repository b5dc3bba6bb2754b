use alphavantage_schema::models::{EndpointSchema, Family, ParamKind, ParamSpec, ResponseShape};

use super::params::{
    ADJUSTED,
    ENTITLEMENT,
    EXTENDED_HOURS,
    INTRADAY_INTERVAL,
    MONTH,
    OUTPUTSIZE,
    SYMBOL,
};

const KEYWORDS: ParamSpec = ParamSpec::required(
    "keywords",
    ParamKind::Text,
    "Text to match against symbols and company names.",
);

pub static ENDPOINTS: &[EndpointSchema] = &[
    endpoint! {
        name: "get_intraday",
        family: Family::TimeSeries,
        function: "TIME_SERIES_INTRADAY",
        shape: ResponseShape::Series,
        description: "Intraday OHLCV time series for an equity, returned as data and meta data.",
        parameters: [SYMBOL, INTRADAY_INTERVAL, OUTPUTSIZE, MONTH, EXTENDED_HOURS, ADJUSTED, ENTITLEMENT],
    },
    endpoint! {
        name: "get_daily",
        family: Family::TimeSeries,
        function: "TIME_SERIES_DAILY",
        shape: ResponseShape::Series,
        description: "Daily OHLCV time series for an equity.",
        parameters: [SYMBOL, OUTPUTSIZE],
    },
    endpoint! {
        name: "get_daily_adjusted",
        family: Family::TimeSeries,
        function: "TIME_SERIES_DAILY_ADJUSTED",
        shape: ResponseShape::Series,
        description: "Daily time series with split/dividend-adjusted close.",
        parameters: [SYMBOL, OUTPUTSIZE, ENTITLEMENT],
    },
    endpoint! {
        name: "get_weekly",
        family: Family::TimeSeries,
        function: "TIME_SERIES_WEEKLY",
        shape: ResponseShape::Series,
        description: "Weekly OHLCV time series for an equity.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_weekly_adjusted",
        family: Family::TimeSeries,
        function: "TIME_SERIES_WEEKLY_ADJUSTED",
        shape: ResponseShape::Series,
        description: "Weekly adjusted time series with dividends, covering up to 20 years.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_monthly",
        family: Family::TimeSeries,
        function: "TIME_SERIES_MONTHLY",
        shape: ResponseShape::Series,
        description: "Monthly OHLCV time series for an equity.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_monthly_adjusted",
        family: Family::TimeSeries,
        function: "TIME_SERIES_MONTHLY_ADJUSTED",
        shape: ResponseShape::Series,
        description: "Monthly adjusted time series with dividends.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_quote_endpoint",
        family: Family::TimeSeries,
        function: "GLOBAL_QUOTE",
        shape: ResponseShape::Keyed("Global Quote"),
        description: "Latest price and volume information for a security.",
        parameters: [SYMBOL, ENTITLEMENT],
    },
    endpoint! {
        name: "get_symbol_search",
        family: Family::TimeSeries,
        function: "SYMBOL_SEARCH",
        shape: ResponseShape::Keyed("bestMatches"),
        description: "Best-matching symbols and market information for keywords.",
        parameters: [KEYWORDS],
    },
    endpoint! {
        name: "get_market_status",
        family: Family::TimeSeries,
        function: "MARKET_STATUS",
        shape: ResponseShape::Keyed("markets"),
        description: "Current open/closed status of major trading venues.",
        parameters: [],
    },
];
