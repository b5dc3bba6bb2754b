//! Tool gateway over the Alpha Vantage market-data API.
//!
//! A request flows through [`catalog::ToolRegistry`] lookup,
//! [`normalize::normalize`], the [`dispatch::Dispatcher`] and finally
//! [`classify::classify`]; [`gateway::Gateway`] composes the four.

pub mod catalog;
pub mod classify;
pub mod dispatch;
pub mod error;
pub mod gateway;
pub mod normalize;
pub mod upstream;

pub use catalog::{RegistryError, ToolRegistry};
pub use classify::Payload;
pub use error::{ErrorKind, GatewayError};
pub use gateway::{Gateway, PreparedInvocation};
pub use normalize::{InvocationRequest, NormalizedParams, ParamValue, Resolved};
pub use upstream::{UpstreamClient, UpstreamFailure, UpstreamFuture, UpstreamQuery};
