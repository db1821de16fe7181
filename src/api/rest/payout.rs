use crate::api::client::TorusClient;
use crate::api::types::{
    AllPayoutsResponse, BulkPayoutConfig, CancelPayoutRequest, InitiateBulkPayoutRequest,
    PayoutDetails, PayoutFilter, PayoutResponse,
};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{
    path_segment, FileAttachment, FormValue, QueryParams, RequestSpec, RestClient,
};
use tracing::instrument;

const PAYOUTS_PATH: &str = "v1/payouts";

impl<R: RestClient> TorusClient<R> {
    /// Pay many recipients in one batch from a JSON list of accounts
    #[instrument(skip(self, ctx, request), fields(currency = %request.currency, accounts = request.accounts.len()))]
    pub async fn initiate_direct_bulk_payout(
        &self,
        ctx: &RequestContext,
        request: &InitiateBulkPayoutRequest,
    ) -> Result<PayoutDetails, TorusError> {
        let spec = RequestSpec::post(PAYOUTS_PATH).with_json(request)?;
        self.send(ctx, spec).await
    }

    /// Pay many recipients in one batch from an uploaded spreadsheet.
    ///
    /// The file is sent as the `file` part of a multipart form, with
    /// `currency` and the optional `remarks` as text parts.
    #[instrument(skip(self, ctx, file), fields(file_name = %file.file_name()))]
    pub async fn upload_bulk_payout(
        &self,
        ctx: &RequestContext,
        currency: &str,
        remarks: Option<&str>,
        file: FileAttachment,
    ) -> Result<PayoutDetails, TorusError> {
        let mut form = vec![
            ("file".to_string(), FormValue::from(file)),
            ("currency".to_string(), FormValue::from(currency)),
        ];
        if let Some(remarks) = remarks {
            form.push(("remarks".to_string(), FormValue::from(remarks)));
        }

        let spec = RequestSpec::post(format!("{}/upload", PAYOUTS_PATH)).with_form(form);
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_all_payouts(
        &self,
        ctx: &RequestContext,
        filter: &PayoutFilter,
    ) -> Result<AllPayoutsResponse, TorusError> {
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

        let spec = RequestSpec::get(PAYOUTS_PATH).with_query(query);
        self.send(ctx, spec).await
    }

    /// Batch summary together with every recipient account
    #[instrument(skip(self, ctx))]
    pub async fn get_payout_by_id(
        &self,
        ctx: &RequestContext,
        payout_id: &str,
    ) -> Result<PayoutResponse, TorusError> {
        let spec = RequestSpec::get(format!("{}/{}", PAYOUTS_PATH, path_segment(payout_id)));
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx, request), fields(payout_id = %request.bulk_payout_id))]
    pub async fn cancel_payout(
        &self,
        ctx: &RequestContext,
        request: &CancelPayoutRequest,
    ) -> Result<PayoutDetails, TorusError> {
        let spec = RequestSpec::post(format!("{}/cancel", PAYOUTS_PATH)).with_json(request)?;
        self.send(ctx, spec).await
    }

    /// Limits and fees that apply to bulk payouts in `currency`
    #[instrument(skip(self, ctx))]
    pub async fn get_bulk_payout_config(
        &self,
        ctx: &RequestContext,
        currency: &str,
    ) -> Result<BulkPayoutConfig, TorusError> {
        let mut query = QueryParams::new();
        query.push("currency", currency);

        let spec = RequestSpec::get(format!("{}/config", PAYOUTS_PATH)).with_query(query);
        self.send(ctx, spec).await
    }
}
