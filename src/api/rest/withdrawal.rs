use crate::api::client::TorusClient;
use crate::api::types::{
    FeeWithdrawal, FeeWithdrawalRequest, InitiateWithdrawalRequest, Withdrawal, WithdrawalRequest,
};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{RequestSpec, RestClient};
use tracing::instrument;

const WITHDRAWAL_PATH: &str = "v1/withdrawal";

// Every withdrawal endpoint is signed with the request reference.
impl<R: RestClient> TorusClient<R> {
    #[instrument(skip(self, ctx, request), fields(reference = %request.reference))]
    pub async fn initiate_withdrawal(
        &self,
        ctx: &RequestContext,
        request: &InitiateWithdrawalRequest,
    ) -> Result<Withdrawal, TorusError> {
        let spec = RequestSpec::post(WITHDRAWAL_PATH)
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }

    /// Withdraw to a bank account
    #[instrument(skip(self, ctx, request), fields(reference = %request.reference))]
    pub async fn fiat_withdrawal(
        &self,
        ctx: &RequestContext,
        request: &WithdrawalRequest,
    ) -> Result<Withdrawal, TorusError> {
        let spec = RequestSpec::post(format!("{}/fiat", WITHDRAWAL_PATH))
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }

    /// Withdraw to a crypto wallet
    #[instrument(skip(self, ctx, request), fields(reference = %request.reference))]
    pub async fn crypto_withdrawal(
        &self,
        ctx: &RequestContext,
        request: &WithdrawalRequest,
    ) -> Result<Withdrawal, TorusError> {
        let spec = RequestSpec::post(format!("{}/crypto", WITHDRAWAL_PATH))
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }

    /// Charge a fee against an earlier withdrawal
    #[instrument(skip(self, ctx, request), fields(reference = %request.reference, fee_type = ?request.fee_type))]
    pub async fn fee_withdrawal(
        &self,
        ctx: &RequestContext,
        request: &FeeWithdrawalRequest,
    ) -> Result<FeeWithdrawal, TorusError> {
        let spec = RequestSpec::post(format!("{}/fee", WITHDRAWAL_PATH))
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }
}
