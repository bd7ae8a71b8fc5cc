//! Core configuration and shared types for fcstack.
//!
//! This crate holds everything the request layer needs to know about the
//! account it talks to: the normalized endpoint, credentials as loaded from
//! the environment, the API version, the request timeout and the user agent.
//! Nothing here is read implicitly; the client receives an [`FcConfig`] value
//! at construction.

mod config;
mod endpoint;
mod error;
mod types;

pub use config::{DEFAULT_API_VERSION, DEFAULT_TIMEOUT, FcConfig, default_user_agent};
pub use endpoint::Endpoint;
pub use error::{ConfigError, ConfigResult};
pub use types::qualified_name;
