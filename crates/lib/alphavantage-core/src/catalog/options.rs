use alphavantage_schema::models::{DateFormat, EndpointSchema, Family, ParamKind, ParamSpec, ResponseShape};
use alphavantage_schema::schema::HISTORICAL_OPTIONS_EARLIEST;

use super::params::SYMBOL;

const CONTRACT: ParamSpec = ParamSpec::optional(
    "contract",
    ParamKind::Text,
    "US options contract ID. The whole chain is returned when unset.",
);

const DATE: ParamSpec = ParamSpec::optional(
    "date",
    ParamKind::date_since(DateFormat::Day, HISTORICAL_OPTIONS_EARLIEST),
    "Trading session (YYYY-MM-DD, 2008-01-01 or later). Previous session when unset.",
);

pub static ENDPOINTS: &[EndpointSchema] = &[
    endpoint! {
        name: "get_realtime_options",
        family: Family::Options,
        function: "REALTIME_OPTIONS",
        shape: ResponseShape::Keyed("data"),
        description: "Realtime US options chain for an equity.",
        parameters: [SYMBOL, CONTRACT],
    },
    endpoint! {
        name: "get_historical_options",
        family: Family::Options,
        function: "HISTORICAL_OPTIONS",
        shape: ResponseShape::Keyed("data"),
        description: "Historical US options chain for an equity on a given trading session.",
        parameters: [SYMBOL, DATE],
    },
];
