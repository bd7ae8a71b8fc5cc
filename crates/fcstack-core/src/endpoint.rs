//! Endpoint normalization.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

/// A normalized FC endpoint: a scheme plus host, no trailing slash.
///
/// # Examples
///
/// ```
/// use fcstack_core::Endpoint;
///
/// let endpoint = Endpoint::parse("123456.cn-hangzhou.fc.aliyuncs.com").unwrap();
/// assert_eq!(endpoint.url(), "https://123456.cn-hangzhou.fc.aliyuncs.com");
/// assert_eq!(endpoint.host(), "123456.cn-hangzhou.fc.aliyuncs.com");
///
/// let local = Endpoint::parse("http://localhost:9000/").unwrap();
/// assert_eq!(local.url(), "http://localhost:9000");
/// assert_eq!(local.host(), "localhost:9000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    url: String,
    host: String,
}

impl Endpoint {
    /// Normalize a user-supplied endpoint. Endpoints without a scheme default to `https://`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] when no host remains after normalization.
    pub fn parse(raw: &str) -> ConfigResult<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        let (scheme, host) = if let Some(host) = trimmed.strip_prefix("http://") {
            ("http", host)
        } else if let Some(host) = trimmed.strip_prefix("https://") {
            ("https", host)
        } else {
            ("https", trimmed)
        };

        if host.is_empty() || host.contains('/') || host.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidEndpoint(raw.to_owned()));
        }

        Ok(Self {
            url: format!("{scheme}://{host}"),
            host: host.to_owned(),
        })
    }

    /// The public (or VPC-internal) endpoint for an account in a region.
    ///
    /// ```
    /// use fcstack_core::Endpoint;
    ///
    /// let endpoint = Endpoint::for_account("123456", "cn-shanghai", true);
    /// assert_eq!(endpoint.host(), "123456.cn-shanghai-internal.fc.aliyuncs.com");
    /// ```
    #[must_use]
    pub fn for_account(account_id: &str, region: &str, internal: bool) -> Self {
        let suffix = if internal { "-internal" } else { "" };
        let host = format!("{account_id}.{region}{suffix}.fc.aliyuncs.com");
        Self {
            url: format!("https://{host}"),
            host,
        }
    }

    /// Scheme and host, e.g. `https://example.com`.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Host (with port, if any) sent in the `host` header.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl FromStr for Endpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
