use crate::api::client::TorusClient;
use crate::api::types::{
    CreateYieldOfferingProfileRequest, Portfolio, UpdateYieldOfferingProfileRequest,
    YieldOfferingProfile,
};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{path_segment, RequestSpec, RestClient};
use tracing::instrument;

const YIELD_OFFERING_PATH: &str = "v1/configuration/yield-offering";

impl<R: RestClient> TorusClient<R> {
    #[instrument(skip(self, ctx))]
    pub async fn get_business_portfolios(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Portfolio>, TorusError> {
        self.send(ctx, RequestSpec::get("v1/configuration/portfolio"))
            .await
    }

    /// Create a yield offering on top of a portfolio. Signed with the request reference.
    #[instrument(skip(self, ctx, request), fields(name = %request.name, reference = %request.reference))]
    pub async fn create_yield_offering_profile(
        &self,
        ctx: &RequestContext,
        request: &CreateYieldOfferingProfileRequest,
    ) -> Result<YieldOfferingProfile, TorusError> {
        let spec = RequestSpec::post(YIELD_OFFERING_PATH)
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }

    /// Rename or re-describe an offering; rates are fixed once created
    #[instrument(skip(self, ctx, request), fields(yield_offering_id = %request.yield_offering_id))]
    pub async fn update_yield_offering_profile(
        &self,
        ctx: &RequestContext,
        request: &UpdateYieldOfferingProfileRequest,
    ) -> Result<YieldOfferingProfile, TorusError> {
        let spec = RequestSpec::put(YIELD_OFFERING_PATH).with_json(request)?;
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_all_yield_profiles(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<YieldOfferingProfile>, TorusError> {
        self.send(ctx, RequestSpec::get(YIELD_OFFERING_PATH)).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_yield_profile_by_id(
        &self,
        ctx: &RequestContext,
        yield_offering_id: &str,
    ) -> Result<YieldOfferingProfile, TorusError> {
        let spec = RequestSpec::get(format!(
            "{}/{}",
            YIELD_OFFERING_PATH,
            path_segment(yield_offering_id)
        ));
        self.send(ctx, spec).await
    }
}
