//! Function Compute service errors.
//!
//! Non-2xx/3xx responses carry a JSON body with `ErrorCode` and
//! `ErrorMessage` fields. The status code alone decides the error class.

use std::fmt;

use serde::Deserialize;

/// Error class derived from the HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Status in `[400, 500)`.
    Client,
    /// Status in `[500, 600)`.
    Server,
    /// Any other non-success status.
    Unknown,
}

impl ErrorKind {
    /// Classify a status code. Returns `None` for success (`[200, 400)`).
    ///
    /// ```
    /// use fcstack_model::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::from_status(204), None);
    /// assert_eq!(ErrorKind::from_status(404), Some(ErrorKind::Client));
    /// assert_eq!(ErrorKind::from_status(503), Some(ErrorKind::Server));
    /// assert_eq!(ErrorKind::from_status(101), Some(ErrorKind::Unknown));
    /// ```
    #[must_use]
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..400 => None,
            400..500 => Some(Self::Client),
            500..600 => Some(Self::Server),
            _ => Some(Self::Unknown),
        }
    }

    /// Label used in error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Server => "Server",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorBody {
    error_code: Option<String>,
    error_message: Option<String>,
}

/// A non-success response from the service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "{kind} error, status_code = {status}, requestId = {}, detail = {body}",
    .request_id.as_deref().unwrap_or_default()
)]
pub struct ServiceError {
    /// Error class.
    pub kind: ErrorKind,
    /// HTTP status code.
    pub status: u16,
    /// Value of the `x-fc-request-id` response header.
    pub request_id: Option<String>,
    /// `ErrorCode` from the JSON body, if present.
    pub error_code: Option<String>,
    /// `ErrorMessage` from the JSON body, if present.
    pub error_message: Option<String>,
    /// The raw response body, lossily decoded.
    pub body: String,
}

impl ServiceError {
    /// Build an error from a response. Returns `None` when `status` is a
    /// success status.
    #[must_use]
    pub fn from_response(status: u16, request_id: Option<String>, body: &[u8]) -> Option<Self> {
        let kind = ErrorKind::from_status(status)?;
        let (error_code, error_message) = serde_json::from_slice::<ErrorBody>(body)
            .map(|parsed| (parsed.error_code, parsed.error_message))
            .unwrap_or_default();

        Some(Self {
            kind,
            status,
            request_id,
            error_code,
            error_message,
            body: String::from_utf8_lossy(body).into_owned(),
        })
    }

    /// Whether the status is a 4xx.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.kind == ErrorKind::Client
    }

    /// Whether the status is a 5xx.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.kind == ErrorKind::Server
    }
}

/// A request payload rejected before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A field the operation requires is absent or blank.
    #[error("`{0}` must be specified")]
    MissingField(&'static str),
}
