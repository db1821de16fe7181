use crate::api::client::TorusClient;
use crate::api::types::{
    Deposit, DepositBatchResponse, DepositLookup, FundTransferRequest, InitiateDepositRequest,
    IntraTransferRequest, IntraTransferResponse,
};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{QueryParams, RequestSpec, RestClient};
use tracing::instrument;

impl<R: RestClient> TorusClient<R> {
    /// Credit a customer's yield offering. Signed with the request reference.
    #[instrument(skip(self, ctx, request), fields(reference = %request.reference))]
    pub async fn initiate_deposit(
        &self,
        ctx: &RequestContext,
        request: &InitiateDepositRequest,
    ) -> Result<Deposit, TorusError> {
        let spec = RequestSpec::post("v1/deposit")
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }

    /// All deposits grouped by batch date, optionally filtered by settlement
    #[instrument(skip(self, ctx))]
    pub async fn get_all_deposits(
        &self,
        ctx: &RequestContext,
        settled: Option<bool>,
    ) -> Result<DepositBatchResponse, TorusError> {
        let mut query = QueryParams::new();
        if let Some(settled) = settled {
            query.push_bool("settled", settled);
        }

        let spec = RequestSpec::get("v1/deposits").with_query(query);
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_deposit(
        &self,
        ctx: &RequestContext,
        lookup: &DepositLookup,
    ) -> Result<Deposit, TorusError> {
        let (key, value) = lookup.query_pair();
        let mut query = QueryParams::new();
        query.push(key, value);

        let spec = RequestSpec::get("v1/deposit/search").with_query(query);
        self.send(ctx, spec).await
    }

    /// Move funds between the business balance and a customer
    #[instrument(skip(self, ctx, request), fields(reference = %request.reference, action = ?request.action))]
    pub async fn internal_funds_transfer(
        &self,
        ctx: &RequestContext,
        request: &FundTransferRequest,
    ) -> Result<Deposit, TorusError> {
        let spec = RequestSpec::post("v1/transfer-funds")
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }

    /// Move funds between two customers of the business
    #[instrument(skip(self, ctx, request), fields(reference = %request.reference))]
    pub async fn intra_transfer(
        &self,
        ctx: &RequestContext,
        request: &IntraTransferRequest,
    ) -> Result<IntraTransferResponse, TorusError> {
        let spec = RequestSpec::post("v1/intra-transfer")
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }
}
