//! Error types for configuration loading.

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required setting was not provided.
    #[error("{0} must be specified to construct the client")]
    Missing(&'static str),

    /// The endpoint could not be normalized.
    #[error("invalid endpoint: {0:?}")]
    InvalidEndpoint(String),

    /// The timeout is not a positive number of seconds.
    #[error("invalid timeout: {0:?} (must be a positive number of seconds)")]
    InvalidTimeout(String),
}

/// Convenience result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
