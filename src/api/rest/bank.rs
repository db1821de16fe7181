use crate::api::client::TorusClient;
use crate::api::types::{
    AccountOpeningFilter, AccountOpeningRequest, AccountResolveRequest, AllAccountOpeningRequests,
    BankAccount, BankCode, GenerateBankAccountRequest,
};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{path_segment, QueryParams, RequestSpec, RestClient};
use crate::core::types::AccountDetails;
use tracing::instrument;

const BANKS_PATH: &str = "v1/payments/banks";
const ACCOUNT_REQUEST_PATH: &str = "v1/payments/account-request";

impl<R: RestClient> TorusClient<R> {
    /// Banks the API can pay out to, with their routing codes
    #[instrument(skip(self, ctx))]
    pub async fn get_banks(&self, ctx: &RequestContext) -> Result<Vec<BankCode>, TorusError> {
        self.send(ctx, RequestSpec::get(BANKS_PATH)).await
    }

    /// Look up the holder name of a bank account.
    ///
    /// An unknown account comes back as [`TorusError::Api`] carrying the
    /// server's text, e.g. `invalid account number`.
    #[instrument(skip(self, ctx, request), fields(bank_code = %request.bank_code))]
    pub async fn resolve_bank_account(
        &self,
        ctx: &RequestContext,
        request: &AccountResolveRequest,
    ) -> Result<AccountDetails, TorusError> {
        let spec =
            RequestSpec::post(format!("{}/resolve-account", BANKS_PATH)).with_json(request)?;
        self.send(ctx, spec).await
    }

    /// Open a virtual bank account for a customer. Signed with the request reference.
    #[instrument(skip(self, ctx, request), fields(customer_id = %request.customer_id, currency = %request.currency, reference = %request.reference))]
    pub async fn generate_bank_account(
        &self,
        ctx: &RequestContext,
        request: &GenerateBankAccountRequest,
    ) -> Result<BankAccount, TorusError> {
        let spec = RequestSpec::post(format!("{}/account", BANKS_PATH))
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_bank_account(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
    ) -> Result<BankAccount, TorusError> {
        let spec = RequestSpec::get(format!(
            "{}/account/{}",
            BANKS_PATH,
            path_segment(customer_id)
        ));
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_account_opening_requests(
        &self,
        ctx: &RequestContext,
        filter: &AccountOpeningFilter,
    ) -> Result<AllAccountOpeningRequests, TorusError> {
        let mut query = QueryParams::new();
        query
            .push_opt("customer_id", filter.customer_id.as_deref())
            .push_opt("status", filter.status.as_deref())
            .push_opt("currency", filter.currency.as_deref());
        if let Some(opened) = filter.opened {
            query.push_bool("opened", opened);
        }
        if let Some(page) = &filter.page {
            page.fill_params(&mut query);
        }

        let spec = RequestSpec::get(ACCOUNT_REQUEST_PATH).with_query(query);
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_account_opening_request_by_id(
        &self,
        ctx: &RequestContext,
        request_id: &str,
    ) -> Result<AccountOpeningRequest, TorusError> {
        let spec = RequestSpec::get(format!(
            "{}/{}",
            ACCOUNT_REQUEST_PATH,
            path_segment(request_id)
        ));
        self.send(ctx, spec).await
    }

    /// The business's own funding account for `currency`
    #[instrument(skip(self, ctx))]
    pub async fn get_deposit_account(
        &self,
        ctx: &RequestContext,
        currency: &str,
    ) -> Result<AccountDetails, TorusError> {
        let spec = RequestSpec::get(format!("v1/deposit-accounts/{}", path_segment(currency)));
        self.send(ctx, spec).await
    }
}
