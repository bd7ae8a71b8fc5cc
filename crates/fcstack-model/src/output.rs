//! Successful response envelope.

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Response header carrying the server-side request id.
pub const REQUEST_ID_HEADER: &str = "x-fc-request-id";

/// A successful (`[200, 400)`) API response.
#[derive(Debug, Clone)]
pub struct FcResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: Bytes,
    /// Parsed body: JSON when the body parses, otherwise the body as a JSON
    /// string. Empty bodies become `Value::Null`.
    pub data: Value,
}

impl FcResponse {
    /// Assemble a response, parsing the body into [`FcResponse::data`].
    #[must_use]
    pub fn from_parts(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        let data = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
        };
        Self {
            status,
            headers,
            body,
            data,
        }
    }

    /// The `x-fc-request-id` header, if present and valid text.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
    }

    /// Deserialize [`FcResponse::data`] into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.data)
    }
}
