use crate::api::client::TorusClient;
use crate::api::types::{AllBeneficiariesResponse, CreateBeneficiaryRequest, TransferBeneficiary};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{path_segment, QueryParams, RequestSpec, RestClient};
use crate::core::types::Page;
use tracing::instrument;

const BENEFICIARIES_PATH: &str = "v1/beneficiaries";

impl<R: RestClient> TorusClient<R> {
    #[instrument(skip(self, ctx, request), fields(currency = %request.currency))]
    pub async fn create_beneficiary(
        &self,
        ctx: &RequestContext,
        request: &CreateBeneficiaryRequest,
    ) -> Result<TransferBeneficiary, TorusError> {
        let spec = RequestSpec::post(BENEFICIARIES_PATH).with_json(request)?;
        self.send(ctx, spec).await
    }

    /// Saved beneficiaries, optionally limited to one destination currency
    #[instrument(skip(self, ctx))]
    pub async fn get_beneficiaries(
        &self,
        ctx: &RequestContext,
        currency: Option<&str>,
        page: Option<&Page>,
    ) -> Result<AllBeneficiariesResponse, TorusError> {
        let mut query = QueryParams::new();
        query.push_opt("destination_currency", currency);
        if let Some(page) = page {
            page.fill_params(&mut query);
        }

        let spec = RequestSpec::get(BENEFICIARIES_PATH).with_query(query);
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_beneficiary_by_id(
        &self,
        ctx: &RequestContext,
        beneficiary_id: &str,
    ) -> Result<TransferBeneficiary, TorusError> {
        let spec = RequestSpec::get(format!(
            "{}/{}",
            BENEFICIARIES_PATH,
            path_segment(beneficiary_id)
        ));
        self.send(ctx, spec).await
    }
}
