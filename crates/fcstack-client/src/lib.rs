//! Function Compute API client for fcstack.
//!
//! Every request is signed by [`fcstack_auth::Signer`] before it leaves the
//! process. The layering is:
//!
//! ```text
//! FcClient (ops: services, functions, triggers, ...)
//!        |
//!        v
//! RequestBuilder (default headers, signing)
//!        |
//!        v
//! Transport (reqwest by default)
//! ```
//!
//! Management calls sign the path only. [`FcClient::do_http_request`], used
//! for HTTP triggers, signs the path together with its query parameters.

pub mod client;
pub mod error;
mod ops;
pub mod request;
pub mod transport;

pub use client::FcClient;
pub use error::{FcError, FcResult};
pub use request::{QuerySigning, RequestBuilder};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
