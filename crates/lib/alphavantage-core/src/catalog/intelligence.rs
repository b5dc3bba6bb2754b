use alphavantage_schema::models::{
    DateFormat,
    EndpointSchema,
    Family,
    ParamDefault,
    ParamKind,
    ParamSpec,
    ResponseShape,
};
use alphavantage_schema::schema::{NEWS_LIMIT_MAX, NEWS_SORT_ORDERS};

const TICKERS: ParamSpec = ParamSpec::optional(
    "tickers",
    ParamKind::Text,
    "Comma-separated stock, crypto or forex symbols, for example IBM or CRYPTO:BTC.",
);

const TOPICS: ParamSpec = ParamSpec::optional(
    "topics",
    ParamKind::Text,
    "Comma-separated news topics, for example technology or ipo.",
);

const TIME_FROM: ParamSpec = ParamSpec::optional(
    "time_from",
    ParamKind::date(DateFormat::Minute),
    "Start of the article window (YYYYMMDDTHHMM). Without time_to the window runs to now.",
);

const TIME_TO: ParamSpec = ParamSpec::optional(
    "time_to",
    ParamKind::date(DateFormat::Minute),
    "End of the article window (YYYYMMDDTHHMM).",
);

const SORT: ParamSpec = ParamSpec::optional(
    "sort",
    ParamKind::Choice(NEWS_SORT_ORDERS),
    "Ordering of returned articles.",
)
.with_default(ParamDefault::Text("LATEST"));

const LIMIT: ParamSpec = ParamSpec::optional(
    "limit",
    ParamKind::Integer {
        min: 1,
        max: NEWS_LIMIT_MAX,
    },
    "Maximum number of articles returned.",
)
.with_default(ParamDefault::Integer(50));

pub static ENDPOINTS: &[EndpointSchema] = &[
    endpoint! {
        name: "get_news_sentiment",
        family: Family::News,
        function: "NEWS_SENTIMENT",
        shape: ResponseShape::Keyed("feed"),
        description: "Live and historical market news with sentiment scores.",
        parameters: [TICKERS, TOPICS, TIME_FROM, TIME_TO, SORT, LIMIT],
    },
    // The three movers tools share one provider call and differ in the table they expect.
    endpoint! {
        name: "get_top_gainers",
        family: Family::News,
        function: "TOP_GAINERS_LOSERS",
        shape: ResponseShape::Keyed("top_gainers"),
        description: "Top 20 gainers in the US market.",
        parameters: [],
    },
    endpoint! {
        name: "get_top_losers",
        family: Family::News,
        function: "TOP_GAINERS_LOSERS",
        shape: ResponseShape::Keyed("top_losers"),
        description: "Top 20 losers in the US market.",
        parameters: [],
    },
    endpoint! {
        name: "get_most_active",
        family: Family::News,
        function: "TOP_GAINERS_LOSERS",
        shape: ResponseShape::Keyed("most_actively_traded"),
        description: "Top 20 most actively traded tickers in the US market.",
        parameters: [],
    },
];
