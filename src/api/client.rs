use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{ReqwestRest, RequestSpec, RestClient, Signer};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::info;

/// Torus API client
///
/// Holds the transport, the request signer and the sandbox flag. Every API
/// operation is an async method taking a [`RequestContext`]; the methods live
/// in the `api::rest` modules, grouped by domain.
///
/// The client holds no mutable state, so a single instance can be shared
/// across tasks.
pub struct TorusClient<R: RestClient = ReqwestRest> {
    rest: R,
    signer: Arc<dyn Signer>,
    sandbox: bool,
}

impl<R: RestClient> TorusClient<R> {
    /// Wire a client around any transport.
    pub fn new(rest: R, signer: Arc<dyn Signer>, sandbox: bool) -> Self {
        Self {
            rest,
            signer,
            sandbox,
        }
    }

    pub fn rest(&self) -> &R {
        &self.rest
    }

    pub const fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    /// Switch to sandbox mode, where the transport logs request and response
    /// bodies at debug level.
    pub fn run_in_sandbox_mode(self) -> Self {
        info!("Torus client running in sandbox mode");
        Self {
            rest: self.rest.verbose(true),
            signer: self.signer,
            sandbox: true,
        }
    }

    pub(crate) fn signature(&self, reference: &str) -> String {
        self.signer.signature(reference)
    }

    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        spec: RequestSpec,
    ) -> Result<T, TorusError> {
        self.rest.execute_json(ctx, spec).await
    }

    /// Send a request whose `data` payload is irrelevant to the caller.
    pub(crate) async fn send_unit(
        &self,
        ctx: &RequestContext,
        spec: RequestSpec,
    ) -> Result<(), TorusError> {
        self.rest.execute(ctx, spec).await.map(|_| ())
    }
}

impl<R: RestClient + std::fmt::Debug> std::fmt::Debug for TorusClient<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TorusClient")
            .field("rest", &self.rest)
            .field("sandbox", &self.sandbox)
            .finish_non_exhaustive()
    }
}
