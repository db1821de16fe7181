use crate::core::config::TorusConfig;
use crate::core::errors::TorusError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig, Sha256Signer};
use crate::api::client::TorusClient;
use crate::api::DEFAULT_BASE_URL;
use std::sync::Arc;

/// Builder for creating Torus clients
///
/// ```rust,no_run
/// use torus::api::TorusBuilder;
///
/// # fn example() -> Result<(), torus::core::errors::TorusError> {
/// let client = TorusBuilder::new()
///     .with_credentials("bearer".to_string(), "public-key".to_string())
///     .with_sandbox(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct TorusBuilder {
    config: TorusConfig,
    rest_timeout: u64,
    user_agent: Option<String>,
}

impl Default for TorusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TorusBuilder {
    /// Create a new `TorusBuilder` with default settings
    pub fn new() -> Self {
        Self {
            config: TorusConfig::new(String::new(), String::new()),
            rest_timeout: 10,
            user_agent: None,
        }
    }

    /// Set the full client configuration
    pub fn with_config(mut self, config: TorusConfig) -> Self {
        self.config = config;
        self
    }

    /// Set API credentials, keeping sandbox and base URL settings
    pub fn with_credentials(mut self, bearer_token: String, public_key: String) -> Self {
        let mut config = TorusConfig::new(bearer_token, public_key).sandbox(self.config.sandbox);
        config.base_url = self.config.base_url.take();
        self.config = config;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config.base_url = Some(base_url);
        self
    }

    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.config.sandbox = sandbox;
        self
    }

    /// Set REST client timeout in seconds
    pub fn with_rest_timeout(mut self, timeout: u64) -> Self {
        self.rest_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Build a client backed by `reqwest`
    pub fn build(self) -> Result<TorusClient<ReqwestRest>, TorusError> {
        let base_url = self
            .config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut rest_config =
            RestClientConfig::new(base_url, "torus".to_string()).with_timeout(self.rest_timeout);
        if let Some(user_agent) = self.user_agent {
            rest_config = rest_config.with_user_agent(user_agent);
        }

        let rest = RestClientBuilder::new(rest_config)
            .with_bearer_token(self.config.bearer_token().to_string())
            .build()?;

        let signer = Arc::new(Sha256Signer::new(self.config.public_key().to_string()));
        let client = TorusClient::new(rest, signer, false);

        if self.config.sandbox {
            Ok(client.run_in_sandbox_mode())
        } else {
            Ok(client)
        }
    }
}

/// Build a client from a configuration with default transport settings
pub fn build_client(config: TorusConfig) -> Result<TorusClient<ReqwestRest>, TorusError> {
    TorusBuilder::new().with_config(config).build()
}
