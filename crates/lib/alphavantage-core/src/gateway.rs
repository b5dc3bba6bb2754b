use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use alphavantage_schema::models::EndpointSchema;
use tracing::{Instrument, debug, field, info, info_span, warn};
use uuid::Uuid;

use crate::catalog::ToolRegistry;
use crate::classify::{Payload, classify};
use crate::dispatch::Dispatcher;
use crate::error::GatewayError;
use crate::normalize::{InvocationRequest, NormalizedParams, normalize};
use crate::upstream::{UpstreamClient, UpstreamQuery};

/// A validated invocation, ready to be sent upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedInvocation {
    pub schema: &'static EndpointSchema,
    pub params: NormalizedParams,
    pub query: UpstreamQuery,
}

/// Validate, dispatch, classify: the whole life of one tool call.
///
/// Holds only the read-only registry and the shared client handle, so clones
/// can serve any number of concurrent invocations.
#[derive(Clone)]
pub struct Gateway {
    registry: Arc<ToolRegistry>,
    dispatcher: Dispatcher,
}

impl Gateway {
    #[must_use]
    pub const fn new(registry: Arc<ToolRegistry>, client: Arc<dyn UpstreamClient>) -> Self {
        Self {
            registry,
            dispatcher: Dispatcher::new(client),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Runs lookup and normalization without touching the network.
    ///
    /// # Errors
    /// Returns `UnknownTool` or one of the normalizer failures.
    pub fn prepare(&self, request: &InvocationRequest) -> Result<PreparedInvocation, GatewayError> {
        let schema = self.registry.lookup(&request.tool_name)?;
        let params = normalize(schema, &request.arguments)?;
        let query = Dispatcher::query(schema, &params);
        Ok(PreparedInvocation {
            schema,
            params,
            query,
        })
    }

    /// Invokes a tool with no cancellation source.
    ///
    /// # Errors
    /// Returns the first validation failure or the classified upstream failure.
    pub async fn invoke(&self, request: &InvocationRequest) -> Result<Payload, GatewayError> {
        self.invoke_until(request, std::future::pending::<()>()).await
    }

    /// Invokes a tool, abandoning the upstream call if `cancelled` completes first.
    ///
    /// Validation always runs to completion; only the outbound call is raced.
    ///
    /// # Errors
    /// As [`Gateway::invoke`], plus [`GatewayError::Cancelled`].
    pub async fn invoke_until<C>(
        &self,
        request: &InvocationRequest,
        cancelled: C,
    ) -> Result<Payload, GatewayError>
    where
        C: Future<Output = ()> + Send,
    {
        let span = info_span!(
            "invoke",
            invocation_id = %Uuid::new_v4(),
            tool = %request.tool_name,
            family = field::Empty,
        );
        self.run(request, cancelled).instrument(span).await
    }

    async fn run<C>(&self, request: &InvocationRequest, cancelled: C) -> Result<Payload, GatewayError>
    where
        C: Future<Output = ()> + Send,
    {
        let started = Instant::now();
        let prepared = self.prepare(request).inspect_err(|err| {
            warn!(kind = %err.kind(), error = %err, "invocation rejected");
        })?;
        tracing::Span::current().record("family", prepared.schema.family.as_str());
        debug!(params = ?prepared.params, "normalized parameters");

        let outcome = tokio::select! {
            biased;
            () = cancelled => {
                warn!("invocation cancelled before the provider answered");
                return Err(GatewayError::Cancelled);
            }
            outcome = self.dispatcher.dispatch(&prepared.query) => outcome,
        };

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        classify(prepared.schema.shape, outcome)
            .inspect(|_| info!(elapsed_ms, "invocation succeeded"))
            .inspect_err(|err| {
                warn!(
                    kind = %err.kind(),
                    retryable = err.is_retryable(),
                    elapsed_ms,
                    error = %err,
                    "invocation failed"
                );
            })
    }
}
