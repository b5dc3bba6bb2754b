//! Endpoint schema models for alphavantage-mcp.
//!
//! This crate defines the declarative data model every tool is described
//! with: parameter kinds, defaults, applicability rules, and the allowed-value
//! sets shared across the catalog.

pub mod models;
pub mod schema;

pub use models::*;
