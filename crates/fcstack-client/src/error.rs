//! Client error type.

use fcstack_auth::AuthError;
use fcstack_core::ConfigError;
use fcstack_model::{ServiceError, ValidationError};

use crate::transport::TransportError;

/// Errors returned by [`crate::FcClient`].
#[derive(Debug, thiserror::Error)]
pub enum FcError {
    /// The request could not be signed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request never produced an HTTP response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service answered with a non-success status.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A caller-supplied value cannot be sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A payload failed to serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ValidationError> for FcError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl FcError {
    /// The service error, when the failure came from an HTTP response.
    #[must_use]
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status of a service error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.as_service_error().map(|err| err.status)
    }
}

/// Result alias for client operations.
pub type FcResult<T> = Result<T, FcError>;
