use alphavantage_schema::models::{EndpointSchema, Family, ResponseShape};

use super::params::SYMBOL;

pub static ENDPOINTS: &[EndpointSchema] = &[
    endpoint! {
        name: "get_company_overview",
        family: Family::Fundamentals,
        function: "OVERVIEW",
        shape: ResponseShape::Document,
        description: "Company information, financial ratios, and key metrics for an equity.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_dividends",
        family: Family::Fundamentals,
        function: "DIVIDENDS",
        shape: ResponseShape::Keyed("data"),
        description: "Historical and declared future dividend distributions.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_splits",
        family: Family::Fundamentals,
        function: "SPLITS",
        shape: ResponseShape::Keyed("data"),
        description: "Historical split events.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_income_statement_annual",
        family: Family::Fundamentals,
        function: "INCOME_STATEMENT",
        shape: ResponseShape::Keyed("annualReports"),
        description: "Annual income statements, normalized to GAAP and IFRS taxonomies.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_income_statement_quarterly",
        family: Family::Fundamentals,
        function: "INCOME_STATEMENT",
        shape: ResponseShape::Keyed("quarterlyReports"),
        description: "Quarterly income statements, normalized to GAAP and IFRS taxonomies.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_balance_sheet_annual",
        family: Family::Fundamentals,
        function: "BALANCE_SHEET",
        shape: ResponseShape::Keyed("annualReports"),
        description: "Annual balance sheets.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_balance_sheet_quarterly",
        family: Family::Fundamentals,
        function: "BALANCE_SHEET",
        shape: ResponseShape::Keyed("quarterlyReports"),
        description: "Quarterly balance sheets.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_cash_flow_annual",
        family: Family::Fundamentals,
        function: "CASH_FLOW",
        shape: ResponseShape::Keyed("annualReports"),
        description: "Annual cash flow statements.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_cash_flow_quarterly",
        family: Family::Fundamentals,
        function: "CASH_FLOW",
        shape: ResponseShape::Keyed("quarterlyReports"),
        description: "Quarterly cash flow statements.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_earnings_annual",
        family: Family::Fundamentals,
        function: "EARNINGS",
        shape: ResponseShape::Keyed("annualEarnings"),
        description: "Annual earnings per share.",
        parameters: [SYMBOL],
    },
    endpoint! {
        name: "get_earnings_quarterly",
        family: Family::Fundamentals,
        function: "EARNINGS",
        shape: ResponseShape::Keyed("quarterlyEarnings"),
        description: "Quarterly earnings with estimates and surprise metrics.",
        parameters: [SYMBOL],
    },
];
