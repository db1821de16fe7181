use crate::api::client::TorusClient;
use crate::api::types::{AllTransactionsResponse, TransactionFilter};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{QueryParams, RequestSpec, RestClient};
use tracing::instrument;

impl<R: RestClient> TorusClient<R> {
    /// Ledger of deposits, withdrawals and transfers.
    ///
    /// Unlike the other listings this endpoint pages with plain `page` and
    /// `size` keys.
    #[instrument(skip(self, ctx))]
    pub async fn get_transactions(
        &self,
        ctx: &RequestContext,
        filter: &TransactionFilter,
    ) -> Result<AllTransactionsResponse, TorusError> {
        let mut query = QueryParams::new();
        query
            .push_opt("customer_id", filter.customer_id)
            .push_opt("yield_offering_id", filter.yield_offering_id)
            .push_opt("reference", filter.reference.as_deref())
            .push_opt("batch_date", filter.batch_date.as_deref())
            .push_opt("size", filter.size)
            .push_opt("page", filter.page);

        let spec = RequestSpec::get("v1/transaction").with_query(query);
        self.send(ctx, spec).await
    }
}
