use alphavantage_schema::models::{EndpointSchema, Family, ResponseShape};
use alphavantage_schema::schema::INTERVALS_INTRADAY;

use super::params::{
    CRYPTO_SYMBOL,
    FROM_CURRENCY,
    MARKET,
    OUTPUTSIZE,
    TO_CURRENCY,
    required_interval,
};

pub static ENDPOINTS: &[EndpointSchema] = &[
    endpoint! {
        name: "get_digital_currency_daily",
        family: Family::Crypto,
        function: "DIGITAL_CURRENCY_DAILY",
        shape: ResponseShape::Series,
        description: "Daily series for a digital currency traded on a market, refreshed at midnight UTC.",
        parameters: [CRYPTO_SYMBOL, MARKET],
    },
    endpoint! {
        name: "get_digital_currency_weekly",
        family: Family::Crypto,
        function: "DIGITAL_CURRENCY_WEEKLY",
        shape: ResponseShape::Series,
        description: "Weekly series for a digital currency traded on a market.",
        parameters: [CRYPTO_SYMBOL, MARKET],
    },
    endpoint! {
        name: "get_digital_currency_monthly",
        family: Family::Crypto,
        function: "DIGITAL_CURRENCY_MONTHLY",
        shape: ResponseShape::Series,
        description: "Monthly series for a digital currency traded on a market.",
        parameters: [CRYPTO_SYMBOL, MARKET],
    },
    endpoint! {
        name: "get_digital_currency_exchange_rate",
        family: Family::Crypto,
        function: "CURRENCY_EXCHANGE_RATE",
        shape: ResponseShape::Keyed("Realtime Currency Exchange Rate"),
        description: "Realtime exchange rate between a digital currency and another currency.",
        parameters: [FROM_CURRENCY, TO_CURRENCY],
    },
    endpoint! {
        name: "get_crypto_intraday",
        family: Family::Crypto,
        function: "CRYPTO_INTRADAY",
        shape: ResponseShape::Series,
        description: "Intraday series for a digital currency, updated realtime.",
        parameters: [CRYPTO_SYMBOL, MARKET, required_interval(INTERVALS_INTRADAY), OUTPUTSIZE],
    },
];
