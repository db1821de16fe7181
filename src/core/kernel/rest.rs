use crate::core::context::{RequestContext, IDEMPOTENCY_KEY_HEADER, REQUEST_ID_HEADER};
use crate::core::errors::TorusError;
use crate::core::kernel::envelope::{decode_data, interpret};
use crate::core::kernel::request::{FormValue, RequestSpec};
use crate::core::kernel::signer::SIGNATURE_HEADER;
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, trace, warn};

/// REST client trait for dispatching API calls
///
/// Implementations send one [`RequestSpec`] and return the envelope's `data`
/// payload, or the error the envelope (or transport) reported.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Send a request and return the raw `data` payload
    async fn execute(&self, ctx: &RequestContext, spec: RequestSpec)
        -> Result<Value, TorusError>;

    /// Send a request and decode `data` into `T`
    async fn execute_json<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        spec: RequestSpec,
    ) -> Result<T, TorusError> {
        let data = self.execute(ctx, spec).await?;
        decode_data(data)
    }

    /// Return a transport that logs request and response bodies verbosely.
    fn verbose(self, _enabled: bool) -> Self
    where
        Self: Sized,
    {
        self
    }
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Service name for logging and tracing
    pub service_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
    /// Log bodies at debug level instead of trace
    pub verbose: bool,
}

impl RestClientConfig {
    /// Create a new configuration
    ///
    /// # Arguments
    /// * `base_url` - Base URL for the API
    /// * `service_name` - Name used in tracing spans
    pub fn new(base_url: String, service_name: String) -> Self {
        Self {
            base_url,
            service_name,
            timeout_seconds: 10,
            user_agent: concat!("torus-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
            verbose: false,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    bearer_token: Secret<String>,
}

impl RestClientBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            bearer_token: Secret::new(String::new()),
        }
    }

    /// Set the bearer token sent in the `Authorization` header
    pub fn with_bearer_token(mut self, bearer_token: String) -> Self {
        self.bearer_token = Secret::new(bearer_token);
        self
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, TorusError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                TorusError::InvalidParameters(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            bearer_token: self.bearer_token,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    bearer_token: Secret<String>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("bearer_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    /// Create a client with default settings
    pub fn new(base_url: String, bearer_token: String) -> Result<Self, TorusError> {
        let config = RestClientConfig::new(base_url, "torus".to_string());
        RestClientBuilder::new(config)
            .with_bearer_token(bearer_token)
            .build()
    }

    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Join base URL and path with exactly one '/'
    pub fn build_url(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    fn default_timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }

    fn log_body(&self, label: &str, body: &str) {
        if self.config.verbose {
            debug!("{}: {}", label, body);
        } else {
            trace!("{}: {}", label, body);
        }
    }

    fn build_request(
        &self,
        method: Method,
        ctx: &RequestContext,
        spec: RequestSpec,
        timeout: Duration,
    ) -> Result<RequestBuilder, TorusError> {
        let parts = spec.into_parts();
        let url = self.build_url(&parts.path);

        let request_id = HeaderValue::from_str(ctx.request_id()).map_err(|_| {
            TorusError::InvalidParameters(format!(
                "request id is not a valid header value: {:?}",
                ctx.request_id()
            ))
        })?;

        let mut request = self
            .client
            .request(method, &url)
            .timeout(timeout)
            .bearer_auth(self.bearer_token.expose_secret())
            .header(REQUEST_ID_HEADER, request_id);

        if let Some(signature) = parts.signature {
            request = request.header(SIGNATURE_HEADER, signature);
        }

        if let Some(key) = ctx.idempotency_key() {
            request = request.header(IDEMPOTENCY_KEY_HEADER, key.to_string());
        }

        if !parts.query.is_empty() {
            trace!("Query parameters: {:?}", parts.query.pairs());
            request = request.query(parts.query.pairs());
        }

        if let Some(fields) = parts.form {
            let mut form = Form::new();
            for (name, value) in fields {
                form = match value {
                    FormValue::Text(text) => {
                        self.log_body("Form field", &format!("{}={}", name, text));
                        form.text(name, text)
                    }
                    FormValue::File(file) => {
                        let file_name = file.file_name().to_string();
                        let content_type = file.content_type();
                        self.log_body(
                            "Form file",
                            &format!("{}={} ({})", name, file_name, content_type),
                        );
                        let part = Part::bytes(file.into_content())
                            .file_name(file_name)
                            .mime_str(content_type)?;
                        form.part(name, part)
                    }
                };
            }
            request = request.multipart(form);
        } else if let Some(body) = parts.body {
            self.log_body("Request body", &body.to_string());
            request = request.json(&body);
        }

        Ok(request)
    }

    /// Handle the response and extract the envelope payload
    #[instrument(skip(self, response), fields(service = %self.config.service_name, status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<Value, TorusError> {
        let status = response.status();
        let response_text = response.text().await?;

        self.log_body("Response body", &response_text);

        let result = interpret(status.as_u16(), &response_text);
        if let Err(e) = &result {
            warn!(status = status.as_u16(), error = %e, "Request failed");
        }
        result
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, TorusError> {
        let response = request.send().await?;
        self.handle_response(response).await
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, ctx, spec), fields(service = %self.config.service_name, method = %spec.method(), path = %spec.path(), request_id = %ctx.request_id()))]
    async fn execute(
        &self,
        ctx: &RequestContext,
        spec: RequestSpec,
    ) -> Result<Value, TorusError> {
        let method = parse_method(spec.method())?;
        let timeout = ctx.timeout().unwrap_or_else(|| self.default_timeout());
        let request = self.build_request(method, ctx, spec, timeout)?;

        match tokio::time::timeout(timeout, self.send(request)).await {
            Ok(Err(TorusError::Http(e))) if e.is_timeout() => Err(TorusError::Timeout(timeout)),
            Ok(result) => result,
            Err(_) => Err(TorusError::Timeout(timeout)),
        }
    }

    fn verbose(mut self, enabled: bool) -> Self {
        self.config.verbose = enabled;
        self
    }
}

/// Map a verb onto a reqwest method. Unsupported verbs fail before any I/O.
pub fn parse_method(method: &str) -> Result<Method, TorusError> {
    match method {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        "HEAD" => Ok(Method::HEAD),
        other => {
            warn!(method = %other, "invalid method passed");
            Err(TorusError::InvalidMethod(other.to_string()))
        }
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
