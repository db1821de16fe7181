use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

/// Connection settings for the Torus API.
///
/// Credentials are kept in [`Secret`] so they never leak through `Debug` or
/// serialization.
#[derive(Debug, Clone)]
pub struct TorusConfig {
    pub bearer_token: Secret<String>,
    pub public_key: Secret<String>,
    pub sandbox: bool,
    pub base_url: Option<String>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for TorusConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("TorusConfig", 4)?;
        state.serialize_field("bearer_token", "[REDACTED]")?;
        state.serialize_field("public_key", "[REDACTED]")?;
        state.serialize_field("sandbox", &self.sandbox)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for TorusConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct TorusConfigHelper {
            bearer_token: String,
            public_key: String,
            #[serde(default)]
            sandbox: bool,
            base_url: Option<String>,
        }

        let helper = TorusConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            bearer_token: Secret::new(helper.bearer_token),
            public_key: Secret::new(helper.public_key),
            sandbox: helper.sandbox,
            base_url: helper.base_url,
        })
    }
}

impl TorusConfig {
    /// Create a new configuration with API credentials
    #[must_use]
    pub fn new(bearer_token: String, public_key: String) -> Self {
        Self {
            bearer_token: Secret::new(bearer_token),
            public_key: Secret::new(public_key),
            sandbox: false,
            base_url: None,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_BEARER_TOKEN` (e.g., `TORUS_BEARER_TOKEN`)
    /// - `{PREFIX}_PUBLIC_KEY`
    /// - `{PREFIX}_SANDBOX` (optional, defaults to false)
    /// - `{PREFIX}_BASE_URL` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let token_var = format!("{}_BEARER_TOKEN", prefix);
        let public_key_var = format!("{}_PUBLIC_KEY", prefix);
        let sandbox_var = format!("{}_SANDBOX", prefix);
        let base_url_var = format!("{}_BASE_URL", prefix);

        let bearer_token = env::var(&token_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(token_var))?;

        let public_key = env::var(&public_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(public_key_var))?;

        let sandbox = match env::var(&sandbox_var) {
            Ok(raw) => raw.parse::<bool>().map_err(|_| {
                ConfigError::InvalidConfiguration(format!(
                    "{} must be 'true' or 'false', got '{}'",
                    sandbox_var, raw
                ))
            })?,
            Err(_) => false,
        };

        let base_url = env::var(&base_url_var).ok();

        Ok(Self {
            bearer_token: Secret::new(bearer_token),
            public_key: Secret::new(public_key),
            sandbox,
            base_url,
        })
    }

    /// Load a `.env` file (if present) and then read the environment.
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Same as [`Self::from_env_file`] with an explicit file path.
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // no file, fall back to the process environment
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Check if this configuration has credentials for authenticated calls
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.bearer_token.expose_secret().is_empty()
    }

    /// Set sandbox mode
    #[must_use]
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set custom base URL
    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Get bearer token (use carefully - exposes secret)
    pub fn bearer_token(&self) -> &str {
        self.bearer_token.expose_secret()
    }

    /// Get public key (use carefully - exposes secret)
    pub fn public_key(&self) -> &str {
        self.public_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
