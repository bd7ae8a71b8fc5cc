//! Error types for FC request signing.

/// Errors that can occur while preparing a request for signing.
///
/// Signing itself is infallible; every variant here is raised while
/// normalizing inputs, before any HMAC computation takes place.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The queries argument was not a key to string-or-list mapping.
    #[error("invalid queries: {0}")]
    InvalidQueries(String),

    /// A percent-decoded path did not form valid UTF-8.
    #[error("path {0:?} does not decode to valid UTF-8")]
    InvalidPathEncoding(String),
}
