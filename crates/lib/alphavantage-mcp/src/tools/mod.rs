//! MCP tool modules.
//!
//! Catalog tools are generated from the registry; `health` and `help` are
//! the only hand-written tools.

pub mod context;
pub mod schema;
