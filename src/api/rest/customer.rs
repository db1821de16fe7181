use crate::api::client::TorusClient;
use crate::api::types::{
    AllCustomersResponse, CreateCustomerRequest, Customer, CustomerBalance, CustomerBalances,
    CustomerInfo, UpdateCustomerRequest,
};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{path_segment, QueryParams, RequestSpec, RestClient};
use crate::core::types::Page;
use tracing::instrument;

const CUSTOMER_PATH: &str = "v1/customer";

impl<R: RestClient> TorusClient<R> {
    /// Create a customer. Signed with the request reference.
    #[instrument(skip(self, ctx, request), fields(reference = %request.reference))]
    pub async fn create_customer(
        &self,
        ctx: &RequestContext,
        request: &CreateCustomerRequest,
    ) -> Result<Customer, TorusError> {
        let spec = RequestSpec::post(CUSTOMER_PATH)
            .with_signature(self.signature(&request.reference))
            .with_json(request)?;
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx, request), fields(customer_id = %request.customer_id))]
    pub async fn update_customer(
        &self,
        ctx: &RequestContext,
        request: &UpdateCustomerRequest,
    ) -> Result<Customer, TorusError> {
        let spec = RequestSpec::patch(CUSTOMER_PATH).with_json(request)?;
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_all_customers(
        &self,
        ctx: &RequestContext,
        page: Option<&Page>,
    ) -> Result<AllCustomersResponse, TorusError> {
        let mut query = QueryParams::new();
        if let Some(page) = page {
            page.fill_params(&mut query);
        }

        let spec = RequestSpec::get(CUSTOMER_PATH).with_query(query);
        self.send(ctx, spec).await
    }

    /// Customer details together with deposit, withdrawal and transaction totals
    #[instrument(skip(self, ctx))]
    pub async fn get_customer_by_id(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
    ) -> Result<CustomerInfo, TorusError> {
        let spec = RequestSpec::get(format!("{}/{}", CUSTOMER_PATH, path_segment(customer_id)));
        self.send(ctx, spec).await
    }

    /// Balance of a customer in a single yield offering
    #[instrument(skip(self, ctx))]
    pub async fn get_customer_balance(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
        yield_offering_id: &str,
    ) -> Result<CustomerBalance, TorusError> {
        let mut query = QueryParams::new();
        query
            .push("customer_id", customer_id)
            .push("yield_offering_id", yield_offering_id);

        let spec = RequestSpec::get(format!("{}/balance", CUSTOMER_PATH)).with_query(query);
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_customer_balances(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
    ) -> Result<CustomerBalances, TorusError> {
        let spec = RequestSpec::get(format!(
            "{}/balances/{}",
            CUSTOMER_PATH,
            path_segment(customer_id)
        ));
        self.send(ctx, spec).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn delete_customer(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
    ) -> Result<(), TorusError> {
        let spec = RequestSpec::delete(format!("{}/{}", CUSTOMER_PATH, path_segment(customer_id)));
        self.send_unit(ctx, spec).await
    }
}
