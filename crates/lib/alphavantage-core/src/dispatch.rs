use std::sync::Arc;

use alphavantage_schema::models::EndpointSchema;
use serde_json::Value;

use crate::normalize::NormalizedParams;
use crate::upstream::{UpstreamClient, UpstreamFailure, UpstreamQuery};

/// Routes normalized parameters to the injected provider client.
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<dyn UpstreamClient>,
}

impl Dispatcher {
    #[must_use]
    pub const fn new(client: Arc<dyn UpstreamClient>) -> Self {
        Self { client }
    }

    /// Translates a schema and its normalized parameters into a provider query.
    #[must_use]
    pub fn query(schema: &EndpointSchema, params: &NormalizedParams) -> UpstreamQuery {
        UpstreamQuery {
            family: schema.family,
            function: schema.function,
            params: params.query_pairs(),
        }
    }

    /// Issues exactly one provider call for `query`; no retries.
    ///
    /// # Errors
    /// Returns the client's [`UpstreamFailure`] unchanged.
    pub async fn dispatch(&self, query: &UpstreamQuery) -> Result<Value, UpstreamFailure> {
        self.client.execute(query).await
    }
}
