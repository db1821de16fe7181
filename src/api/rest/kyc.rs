use crate::api::client::TorusClient;
use crate::api::types::{KycRecord, VerifyCustomerKycRequest, VerifyCustomerKycResponse};
use crate::core::context::RequestContext;
use crate::core::errors::TorusError;
use crate::core::kernel::{path_segment, FileAttachment, FormValue, RequestSpec, RestClient};
use tracing::instrument;

const KYC_PATH: &str = "v1/kyc";

impl<R: RestClient> TorusClient<R> {
    #[instrument(skip(self, ctx))]
    pub async fn get_kyc_by_customer_id(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
    ) -> Result<KycRecord, TorusError> {
        let spec = RequestSpec::get(format!("{}/{}", KYC_PATH, path_segment(customer_id)));
        self.send(ctx, spec).await
    }

    /// Upload an identity document for verification.
    ///
    /// Sent as `multipart/form-data` with the parts `document`, `documentType`
    /// and `country`. The document part's content type follows the file
    /// extension.
    #[instrument(skip(self, ctx, document), fields(file_name = %document.file_name()))]
    pub async fn submit_customer_kyc_document(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
        document: FileAttachment,
        document_type: &str,
        country: &str,
    ) -> Result<KycRecord, TorusError> {
        let form = vec![
            ("document".to_string(), FormValue::from(document)),
            ("documentType".to_string(), FormValue::from(document_type)),
            ("country".to_string(), FormValue::from(country)),
        ];

        let spec = RequestSpec::post(format!(
            "{}/{}/document-verification",
            KYC_PATH, path_segment(customer_id)
        ))
        .with_form(form);
        self.send(ctx, spec).await
    }

    /// Ask the KYC provider for a hosted verification link
    #[instrument(skip(self, ctx, request))]
    pub async fn verify_customer_kyc(
        &self,
        ctx: &RequestContext,
        customer_id: &str,
        request: &VerifyCustomerKycRequest,
    ) -> Result<VerifyCustomerKycResponse, TorusError> {
        let spec = RequestSpec::post(format!(
            "{}/{}/verify",
            KYC_PATH,
            path_segment(customer_id)
        ))
        .with_json(request)?;
        self.send(ctx, spec).await
    }
}
