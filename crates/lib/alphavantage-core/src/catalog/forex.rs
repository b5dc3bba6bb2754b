use alphavantage_schema::models::{EndpointSchema, Family, ResponseShape};

use super::params::{
    FROM_CURRENCY,
    FROM_SYMBOL,
    INTRADAY_INTERVAL,
    OUTPUTSIZE,
    TO_CURRENCY,
    TO_SYMBOL,
};

pub static ENDPOINTS: &[EndpointSchema] = &[
    endpoint! {
        name: "get_currency_exchange_rate",
        family: Family::Forex,
        function: "CURRENCY_EXCHANGE_RATE",
        shape: ResponseShape::Keyed("Realtime Currency Exchange Rate"),
        description: "Realtime exchange rate for a pair of physical or digital currencies.",
        parameters: [FROM_CURRENCY, TO_CURRENCY],
    },
    endpoint! {
        name: "get_currency_exchange_intraday",
        family: Family::Forex,
        function: "FX_INTRADAY",
        shape: ResponseShape::Series,
        description: "Intraday exchange rate series for a currency pair.",
        parameters: [FROM_SYMBOL, TO_SYMBOL, INTRADAY_INTERVAL, OUTPUTSIZE],
    },
    endpoint! {
        name: "get_currency_exchange_daily",
        family: Family::Forex,
        function: "FX_DAILY",
        shape: ResponseShape::Series,
        description: "Daily exchange rate series for a currency pair.",
        parameters: [FROM_SYMBOL, TO_SYMBOL, OUTPUTSIZE],
    },
    endpoint! {
        name: "get_currency_exchange_weekly",
        family: Family::Forex,
        function: "FX_WEEKLY",
        shape: ResponseShape::Series,
        description: "Weekly exchange rate series for a currency pair.",
        parameters: [FROM_SYMBOL, TO_SYMBOL, OUTPUTSIZE],
    },
    endpoint! {
        name: "get_currency_exchange_monthly",
        family: Family::Forex,
        function: "FX_MONTHLY",
        shape: ResponseShape::Series,
        description: "Monthly exchange rate series for a currency pair.",
        parameters: [FROM_SYMBOL, TO_SYMBOL, OUTPUTSIZE],
    },
];
