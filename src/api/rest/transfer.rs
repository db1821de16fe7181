use crate::api::client::TorusClient;
use crate::api::types::{
    AllTransfersResponse, InitiateTerminalTransferRequest, InitiateTransferRequest,
    TerminalTransfer, Transfer, TransferFilter,
};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{path_segment, QueryParams, RequestSpec, RestClient};
use tracing::instrument;

const TRANSFERS_PATH: &str = "v1/transfers";

impl<R: RestClient> TorusClient<R> {
    /// Send funds from a customer balance to an external account.
    /// Signed with the request reference.
    #[instrument(skip(self, ctx, request), fields(reference = %request.reference, currency = %request.currency))]
    pub async fn initiate_transfer(
        &self,
        ctx: &RequestContext,
        request: &InitiateTransferRequest,
    ) -> Result<Transfer, TorusError> {
        let spec = RequestSpec::post("v1/transfer")
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx, request), fields(source = %request.source_currency, destination = %request.destination_currency))]
    pub async fn initiate_terminal_transfer(
        &self,
        ctx: &RequestContext,
        request: &InitiateTerminalTransferRequest,
    ) -> Result<TerminalTransfer, TorusError> {
        let spec = RequestSpec::post(TRANSFERS_PATH).with_json(request)?;
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_all_transfers(
        &self,
        ctx: &RequestContext,
        filter: &TransferFilter,
    ) -> Result<AllTransfersResponse, TorusError> {
        let mut query = QueryParams::new();
        query
            .push_opt("status", filter.status.as_deref())
            .push_opt("currency", filter.currency.as_deref());
        if let Some(range) = &filter.date_between {
            range.fill_params(&mut query);
        }
        if let Some(page) = &filter.page {
            page.fill_params(&mut query);
        }

        let spec = RequestSpec::get(TRANSFERS_PATH).with_query(query);
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_transfer_by_id(
        &self,
        ctx: &RequestContext,
        transfer_id: &str,
    ) -> Result<TerminalTransfer, TorusError> {
        let spec = RequestSpec::get(format!("{}/{}", TRANSFERS_PATH, path_segment(transfer_id)));
        self.send(ctx, spec).await
    }
}
