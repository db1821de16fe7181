use crate::api::client::TorusClient;
use crate::api::types::{
    AllSwapsResponse, CurrencySwap, CurrencySwapFilter, InitiateCurrencySwapRequest,
};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{path_segment, QueryParams, RequestSpec, RestClient};
use tracing::instrument;

const SWAPS_PATH: &str = "v1/currency-swaps";

impl<R: RestClient> TorusClient<R> {
    #[instrument(skip(self, ctx, request), fields(from = %request.from_currency, to = %request.to_currency))]
    pub async fn initiate_currency_swap(
        &self,
        ctx: &RequestContext,
        request: &InitiateCurrencySwapRequest,
    ) -> Result<CurrencySwap, TorusError> {
        let spec = RequestSpec::post(SWAPS_PATH).with_json(request)?;
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_currency_swaps(
        &self,
        ctx: &RequestContext,
        filter: &CurrencySwapFilter,
    ) -> Result<AllSwapsResponse, TorusError> {
        let mut query = QueryParams::new();
        query
            .push_opt("status", filter.status.as_deref())
            .push_opt("from_currency", filter.from_currency.as_deref())
            .push_opt("to_currency", filter.to_currency.as_deref());
        if let Some(range) = &filter.date_between {
            range.fill_params(&mut query);
        }
        if let Some(page) = &filter.page {
            page.fill_params(&mut query);
        }

        let spec = RequestSpec::get(SWAPS_PATH).with_query(query);
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_currency_swap_by_id(
        &self,
        ctx: &RequestContext,
        swap_id: &str,
    ) -> Result<CurrencySwap, TorusError> {
        let spec = RequestSpec::get(format!("{}/{}", SWAPS_PATH, path_segment(swap_id)));
        self.send(ctx, spec).await
    }
}
