/// Torus kernel - transport layer shared by every endpoint wrapper
///
/// The kernel holds no endpoint knowledge. It knows how to sign a reference,
/// how to describe and dispatch one HTTP call, and how to unwrap the
/// `{status, data, message, error}` envelope the API answers with.
///
/// - `RestClient`: pluggable transport seam, `ReqwestRest` is the default
/// - `RequestSpec`: verb, path, signature, query, multipart fields, JSON body
/// - `Signer`: `Signature` header computation
/// - `envelope`: response interpretation and typed decoding
///
/// ```rust,no_run
/// use torus::core::context::RequestContext;
/// use torus::core::kernel::*;
///
/// # async fn example() -> Result<(), torus::core::errors::TorusError> {
/// let rest = RestClientBuilder::new(RestClientConfig::new(
///     "https://sandbox-api.ovalfi-app.com".to_string(),
///     "torus".to_string(),
/// ))
/// .with_bearer_token("token".to_string())
/// .build()?;
///
/// let banks: serde_json::Value = rest
///     .execute(&RequestContext::new(), RequestSpec::get("v1/payments/banks"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub mod envelope;
pub mod request;
pub mod rest;
pub mod signer;

// Re-export key types for convenience
pub use envelope::{decode_data, interpret, Envelope, ErrorDetail};
pub use request::{path_segment, FileAttachment, FormValue, QueryParams, RequestSpec};
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{sign, Sha256Signer, Signer};
