use alphavantage_schema::models::{EndpointSchema, Family, ParamDefault, ParamKind, ParamSpec, ResponseShape};
use alphavantage_schema::schema::{
    INTERVALS_DAILY_WEEKLY_MONTHLY,
    INTERVALS_MONTHLY_SEMIANNUAL,
    INTERVALS_QUARTERLY_ANNUAL,
    TREASURY_MATURITIES,
};

use super::params::interval;

const GDP_INTERVAL: ParamSpec = interval(INTERVALS_QUARTERLY_ANNUAL, "annual");
const RATE_INTERVAL: ParamSpec = interval(INTERVALS_DAILY_WEEKLY_MONTHLY, "monthly");

const MATURITY: ParamSpec = ParamSpec::optional(
    "maturity",
    ParamKind::Choice(TREASURY_MATURITIES),
    "Treasury maturity timeline.",
)
.with_default(ParamDefault::Text("10year"));

macro_rules! economic {
    ($name:literal, $function:literal, $description:literal, [$($param:expr),* $(,)?]) => {
        endpoint! {
            name: $name,
            family: Family::Macro,
            function: $function,
            shape: ResponseShape::Keyed("data"),
            description: $description,
            parameters: [$($param),*],
        }
    };
}

pub static ENDPOINTS: &[EndpointSchema] = &[
    economic!("get_real_gdp", "REAL_GDP", "Annual and quarterly real GDP of the United States.", [GDP_INTERVAL]),
    economic!(
        "get_real_gdp_per_capita",
        "REAL_GDP_PER_CAPITA",
        "Quarterly real GDP per capita of the United States.",
        [GDP_INTERVAL]
    ),
    economic!(
        "get_treasury_yield",
        "TREASURY_YIELD",
        "US treasury yield of a given maturity timeline.",
        [RATE_INTERVAL, MATURITY]
    ),
    economic!(
        "get_ffr",
        "FEDERAL_FUNDS_RATE",
        "Federal funds rate (interest rate) of the United States.",
        [RATE_INTERVAL]
    ),
    economic!(
        "get_cpi",
        "CPI",
        "Consumer price index of the United States.",
        [interval(INTERVALS_MONTHLY_SEMIANNUAL, "monthly")]
    ),
    economic!("get_inflation", "INFLATION", "Annual inflation rates (consumer prices) of the United States.", []),
    economic!(
        "get_retail_sales",
        "RETAIL_SALES",
        "Monthly advance retail sales of the United States.",
        []
    ),
    economic!(
        "get_durables",
        "DURABLES",
        "Monthly manufacturers' new orders of durable goods in the United States.",
        []
    ),
    economic!("get_unemployment", "UNEMPLOYMENT", "Monthly unemployment rate of the United States.", []),
    economic!("get_nonfarm", "NONFARM_PAYROLL", "Monthly US all employees: total nonfarm.", []),
];
