use crate::api::client::TorusClient;
use crate::api::types::{
    AllCardsResponse, Card, CreateCustomerCardRequest, CustomerPaymentSessionRequest,
    CustomerPaymentSessionResponse, FreezeCardRequest, FundCustomerCardRequest, VaultedCardDetails,
};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{path_segment, QueryParams, RequestSpec, RestClient};
use tracing::instrument;

const CARDS_PATH: &str = "v1/cards";

impl<R: RestClient> TorusClient<R> {
    /// Issue a card to a customer. Signed with the request reference.
    ///
    /// The API answers with a status string rather than the card itself.
    #[instrument(skip(self, ctx, request), fields(customer_id = %request.customer_id, reference = %request.reference))]
    pub async fn create_customer_card(
        &self,
        ctx: &RequestContext,
        request: &CreateCustomerCardRequest,
    ) -> Result<String, TorusError> {
        let spec = RequestSpec::post(CARDS_PATH)
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx, request), fields(card_id = %request.card_id, freeze = %request.freeze_card))]
    pub async fn freeze_unfreeze_card(
        &self,
        ctx: &RequestContext,
        request: &FreezeCardRequest,
    ) -> Result<String, TorusError> {
        let spec = RequestSpec::post(format!("{}/freeze", CARDS_PATH)).with_json(request)?;
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_customer_cards(
        &self,
        ctx: &RequestContext,
        customer_id: Option<&str>,
    ) -> Result<AllCardsResponse, TorusError> {
        let mut query = QueryParams::new();
        query.push_opt("customer_id", customer_id);

        let spec = RequestSpec::get(CARDS_PATH).with_query(query);
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_customer_card_by_id(
        &self,
        ctx: &RequestContext,
        card_id: &str,
    ) -> Result<Card, TorusError> {
        let spec = RequestSpec::get(format!("{}/{}", CARDS_PATH, path_segment(card_id)));
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx, request), fields(card_id = %request.card_id, amount = request.transfer_amount))]
    pub async fn fund_customer_card(
        &self,
        ctx: &RequestContext,
        request: &FundCustomerCardRequest,
    ) -> Result<Card, TorusError> {
        let spec = RequestSpec::post(format!("{}/fund", CARDS_PATH)).with_json(request)?;
        self.send(ctx, spec).await
    }

    /// Full card number and CVV. The result redacts itself in `Debug` output.
    #[instrument(skip(self, ctx))]
    pub async fn get_customer_card_secure_details(
        &self,
        ctx: &RequestContext,
        card_id: &str,
        customer_id: &str,
    ) -> Result<VaultedCardDetails, TorusError> {
        let mut query = QueryParams::new();
        query.push("customer_id", customer_id);

        let spec = RequestSpec::get(format!(
            "{}/{}/secure",
            CARDS_PATH,
            path_segment(card_id)
        ))
        .with_query(query);
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn delete_card(
        &self,
        ctx: &RequestContext,
        card_id: &str,
        customer_id: &str,
    ) -> Result<String, TorusError> {
        let mut query = QueryParams::new();
        query.push("customer_id", customer_id);

        let spec = RequestSpec::delete(format!(
            "{}/{}",
            CARDS_PATH,
            path_segment(card_id)
        ))
        .with_query(query);
        self.send(ctx, spec).await
    }

    /// Open a hosted session in which the customer pays by card
    #[instrument(skip(self, ctx, request), fields(customer_id = %request.customer_id, reference = %request.reference))]
    pub async fn initiate_customer_payment_session(
        &self,
        ctx: &RequestContext,
        request: &CustomerPaymentSessionRequest,
    ) -> Result<CustomerPaymentSessionResponse, TorusError> {
        let spec = RequestSpec::post(format!(
            "{}/initiate-customer-payment-session",
            CARDS_PATH
        ))
        .with_json(request)?;
        self.send(ctx, spec).await
    }
}
