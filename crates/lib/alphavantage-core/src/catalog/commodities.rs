use alphavantage_schema::models::{EndpointSchema, Family, ParamSpec, ResponseShape};
use alphavantage_schema::schema::{
    INTERVALS_DAILY_WEEKLY_MONTHLY,
    INTERVALS_MONTHLY_QUARTERLY_ANNUAL,
};

use super::params::interval;

const ENERGY_INTERVAL: ParamSpec = interval(INTERVALS_DAILY_WEEKLY_MONTHLY, "monthly");
const MATERIALS_INTERVAL: ParamSpec = interval(INTERVALS_MONTHLY_QUARTERLY_ANNUAL, "monthly");

macro_rules! commodity {
    ($name:literal, $function:literal, $description:literal, $interval:expr) => {
        endpoint! {
            name: $name,
            family: Family::Commodity,
            function: $function,
            shape: ResponseShape::Keyed("data"),
            description: $description,
            parameters: [$interval],
        }
    };
}

pub static ENDPOINTS: &[EndpointSchema] = &[
    commodity!("get_wti", "WTI", "West Texas Intermediate (WTI) crude oil prices.", ENERGY_INTERVAL),
    commodity!("get_brent", "BRENT", "Brent (Europe) crude oil prices.", ENERGY_INTERVAL),
    commodity!("get_natural_gas", "NATURAL_GAS", "Henry Hub natural gas spot prices.", ENERGY_INTERVAL),
    commodity!("get_copper", "COPPER", "Global price of copper.", MATERIALS_INTERVAL),
    commodity!("get_aluminum", "ALUMINUM", "Global price of aluminum.", MATERIALS_INTERVAL),
    commodity!("get_wheat", "WHEAT", "Global price of wheat.", MATERIALS_INTERVAL),
    commodity!("get_corn", "CORN", "Global price of corn.", MATERIALS_INTERVAL),
    commodity!("get_cotton", "COTTON", "Global price of cotton.", MATERIALS_INTERVAL),
    commodity!("get_sugar", "SUGAR", "Global price of sugar.", MATERIALS_INTERVAL),
    commodity!("get_coffee", "COFFEE", "Global price of coffee.", MATERIALS_INTERVAL),
    commodity!(
        "get_price_index",
        "ALL_COMMODITIES",
        "Global price index of all commodities.",
        MATERIALS_INTERVAL
    ),
];
