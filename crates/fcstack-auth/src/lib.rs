//! Function Compute request authentication for fcstack.
//!
//! Every FC API request carries an `authorization` header of the form
//! `FC <AccessKeyId>:<Signature>`, where the signature is a base64
//! HMAC-SHA256 over a canonical rendering of the request. The server rebuilds
//! the same canonical string to verify it, so the rules here must match it
//! byte for byte.
//!
//! # Usage
//!
//! ```rust
//! use fcstack_auth::{Credential, Queries, Signer, unescape};
//! use http::HeaderMap;
//!
//! let signer = Signer::new(Credential::new("akid", "secret", None));
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("date", "Mon, 02 Jan 2006 15:04:05 GMT".parse().unwrap());
//!
//! let path = unescape("/2016-08-15/proxy/svc/fn/a%20b").unwrap();
//! let queries = Queries::new().with("key", "value");
//! let token = signer.sign("GET", &path, &headers, Some(&queries));
//! assert!(token.as_str().starts_with("FC akid:"));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical request and string-to-sign construction
//! - [`credentials`] - Access key credentials
//! - [`encoding`] - Base64 helpers
//! - [`error`] - Input validation errors
//! - [`query`] - Query parameter model
//! - [`signer`] - HMAC-SHA256 signing
//! - [`unescape`](mod@unescape) - Percent-decoding of paths

pub mod canonical;
pub mod credentials;
pub mod encoding;
pub mod error;
pub mod query;
pub mod signer;
pub mod unescape;

pub use canonical::{CanonicalRequest, HEADER_PREFIX};
pub use credentials::Credential;
pub use encoding::{base64_encode, base64_url_encode};
pub use error::AuthError;
pub use query::{Queries, QueryValue};
pub use signer::{
    AUTHORIZATION_HEADER, AuthorizationToken, SIGNATURE_SCHEME, Signer, compute_signature,
};
pub use unescape::{escape_path, unescape, unescape_bytes};
