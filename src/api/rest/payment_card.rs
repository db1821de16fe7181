use crate::api::client::TorusClient;
use crate::api::types::{
    AllPaymentCardsResponse, CompleteCardRequest, DebitPaymentCardRequest,
    GetLinkToAddCardRequest, InitiateCardRequest, PaymentCard, PaymentCardFilter,
};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{path_segment, QueryParams, RequestSpec, RestClient};
use tracing::instrument;

const PAYMENT_CARDS_PATH: &str = "v1/payments/cards";

impl<R: RestClient> TorusClient<R> {
    /// Start linking a customer's card for direct debit.
    /// Returns the provider redirect link.
    #[instrument(skip(self, ctx, request), fields(customer_id = %request.customer_id, reference = %request.reference))]
    pub async fn initiate_payment_card_request(
        &self,
        ctx: &RequestContext,
        request: &InitiateCardRequest,
    ) -> Result<String, TorusError> {
        let spec = RequestSpec::post(format!("{}/initiate", PAYMENT_CARDS_PATH))
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }

    /// Finish the link flow with the auth code the provider redirected with
    #[instrument(skip(self, ctx, request), fields(customer_id = %request.customer_id))]
    pub async fn complete_payment_card_request(
        &self,
        ctx: &RequestContext,
        request: &CompleteCardRequest,
    ) -> Result<(), TorusError> {
        let spec =
            RequestSpec::post(format!("{}/complete", PAYMENT_CARDS_PATH)).with_json(request)?;
        self.send_unit(ctx, spec).await
    }

    #[instrument(skip(self, ctx, request), fields(customer_id = %request.customer_id))]
    pub async fn get_link_to_add_payment_card(
        &self,
        ctx: &RequestContext,
        request: &GetLinkToAddCardRequest,
    ) -> Result<String, TorusError> {
        let spec = RequestSpec::post(PAYMENT_CARDS_PATH).with_json(request)?;
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx, request), fields(customer_id = %request.customer_id))]
    pub async fn get_link_to_authorize_customer(
        &self,
        ctx: &RequestContext,
        request: &GetLinkToAddCardRequest,
    ) -> Result<String, TorusError> {
        let spec =
            RequestSpec::post(format!("{}/authorize", PAYMENT_CARDS_PATH)).with_json(request)?;
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_customer_payment_cards(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
        filter: &PaymentCardFilter,
    ) -> Result<AllPaymentCardsResponse, TorusError> {
        let mut query = QueryParams::new();
        query
            .push_opt("status", filter.status.as_deref())
            .push_opt("search", filter.search.as_deref());
        if let Some(range) = &filter.date_between {
            range.fill_params(&mut query);
        }
        if let Some(page) = &filter.page {
            page.fill_params(&mut query);
        }

        let spec = RequestSpec::get(format!("{}/{}", PAYMENT_CARDS_PATH, path_segment(customer_id)))
            .with_query(query);
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_customer_payment_card_by_id(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
        card_id: &str,
    ) -> Result<PaymentCard, TorusError> {
        let spec = RequestSpec::get(format!(
            "{}/{}/{}",
            PAYMENT_CARDS_PATH, path_segment(customer_id), path_segment(card_id)
        ));
        self.send(ctx, spec).await
    }

    /// Charge a linked card. Signed with the request reference.
    #[instrument(skip(self, ctx, request), fields(card_id = %request.card_id, reference = %request.reference))]
    pub async fn debit_payment_card(
        &self,
        ctx: &RequestContext,
        request: &DebitPaymentCardRequest,
    ) -> Result<String, TorusError> {
        let spec = RequestSpec::post(format!("{}/debit", PAYMENT_CARDS_PATH))
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }
}
