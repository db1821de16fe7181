use crate::api::client::TorusClient;
use crate::api::types::{CustomerWallet, CustomerWalletRequest, SupportedAsset};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{path_segment, QueryParams, RequestSpec, RestClient};
use tracing::instrument;

impl<R: RestClient> TorusClient<R> {
    /// Deposit wallet of a customer for one asset on one network
    #[instrument(skip(self, ctx, request), fields(customer_id = %request.customer_id, asset = %request.asset, network = %request.network))]
    pub async fn get_customer_wallet(
        &self,
        ctx: &RequestContext,
        request: &CustomerWalletRequest,
    ) -> Result<CustomerWallet, TorusError> {
        let mut query = QueryParams::new();
        query
            .push("customer_id", &request.customer_id)
            .push("network", &request.network)
            .push("asset", &request.asset);

        let spec = RequestSpec::get("v1/crypto/wallet").with_query(query);
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_wallets(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
    ) -> Result<Vec<CustomerWallet>, TorusError> {
        let spec = RequestSpec::get(format!(
            "v1/payments/crypto/wallet/{}",
            path_segment(customer_id)
        ));
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_supported_assets(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<SupportedAsset>, TorusError> {
        self.send(ctx, RequestSpec::get("v1/supported-assets")).await
    }
}
