//! Client configuration.
//!
//! Configuration can be built programmatically or loaded from environment
//! variables:
//!
//! | Variable | Fallback | Description |
//! |----------|----------|-------------|
//! | `FC_ENDPOINT` | | Endpoint, with or without scheme |
//! | `FC_ACCESS_KEY_ID` | `ALIBABA_CLOUD_ACCESS_KEY_ID` | Access key id |
//! | `FC_ACCESS_KEY_SECRET` | `ALIBABA_CLOUD_ACCESS_KEY_SECRET` | Access key secret |
//! | `FC_SECURITY_TOKEN` | `ALIBABA_CLOUD_SECURITY_TOKEN` | STS token (optional) |
//! | `FC_TIMEOUT_SECS` | | Request timeout, default `60` |
//! | `FC_API_VERSION` | | API version, default `2016-08-15` |

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::endpoint::Endpoint;
use crate::error::{ConfigError, ConfigResult};

/// API version every path is prefixed with.
pub const DEFAULT_API_VERSION: &str = "2016-08-15";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// The user agent sent with every request.
#[must_use]
pub fn default_user_agent() -> String {
    format!(
        "aliyun-fc-sdk-v{}.rust.{}-{}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Configuration for an FC client.
#[derive(Clone)]
pub struct FcConfig {
    /// Normalized endpoint.
    pub endpoint: Endpoint,
    /// Access key id.
    pub access_key_id: String,
    /// Access key secret.
    pub access_key_secret: String,
    /// STS security token, for temporary credentials.
    pub security_token: Option<String>,
    /// API version path prefix.
    pub api_version: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent header value.
    pub user_agent: String,
}

impl FcConfig {
    /// Create a configuration with default timeout, API version and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the access key id or secret is blank
    /// and [`ConfigError::InvalidEndpoint`] if the endpoint cannot be normalized.
    pub fn new(
        endpoint: &str,
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
    ) -> ConfigResult<Self> {
        let access_key_id = access_key_id.into();
        let access_key_secret = access_key_secret.into();

        if endpoint.trim().is_empty() {
            return Err(ConfigError::Missing("endpoint"));
        }
        if access_key_id.trim().is_empty() {
            return Err(ConfigError::Missing("access key id"));
        }
        if access_key_secret.trim().is_empty() {
            return Err(ConfigError::Missing("access key secret"));
        }

        Ok(Self {
            endpoint: Endpoint::parse(endpoint)?,
            access_key_id,
            access_key_secret,
            security_token: None,
            api_version: DEFAULT_API_VERSION.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        })
    }

    /// Set the STS security token. Blank tokens clear it.
    #[must_use]
    pub fn with_security_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.security_token = (!token.trim().is_empty()).then_some(token);
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the API version path prefix.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Override the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |keys: &[&str]| {
            keys.iter()
                .filter_map(|&key| lookup(key))
                .find(|value| !value.trim().is_empty())
        };

        let endpoint = get(&["FC_ENDPOINT"]).ok_or(ConfigError::Missing("endpoint"))?;
        let access_key_id = get(&["FC_ACCESS_KEY_ID", "ALIBABA_CLOUD_ACCESS_KEY_ID"])
            .ok_or(ConfigError::Missing("access key id"))?;
        let access_key_secret = get(&["FC_ACCESS_KEY_SECRET", "ALIBABA_CLOUD_ACCESS_KEY_SECRET"])
            .ok_or(ConfigError::Missing("access key secret"))?;

        let mut config = Self::new(&endpoint, access_key_id, access_key_secret)?;

        if let Some(token) = get(&["FC_SECURITY_TOKEN", "ALIBABA_CLOUD_SECURITY_TOKEN"]) {
            config = config.with_security_token(token);
        }
        if let Some(v) = get(&["FC_TIMEOUT_SECS"]) {
            let secs = v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(v.clone()))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(v) = get(&["FC_API_VERSION"]) {
            config = config.with_api_version(v);
        }

        debug!(
            endpoint = %config.endpoint,
            access_key_id = %config.access_key_id,
            timeout_secs = config.timeout.as_secs(),
            "loaded FC client configuration"
        );

        Ok(config)
    }
}

impl fmt::Debug for FcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FcConfig")
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"***")
            .field("security_token", &self.security_token.as_ref().map(|_| "***"))
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
