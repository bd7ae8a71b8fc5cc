//! Function Compute API model for fcstack.
//!
//! This crate contains:
//!
//! - **Operations**: the [`FcOperation`] enum naming every management call
//! - **Input**: JSON request payloads with `camelCase` field names
//! - **Options**: list paging parameters rendered as queries
//! - **Output**: the [`FcResponse`] envelope around status, headers and body
//! - **Errors**: [`ServiceError`], the structured form of 4xx/5xx responses

pub mod error;
pub mod input;
pub mod operations;
pub mod options;
pub mod output;
pub mod types;

pub use error::{ErrorKind, ServiceError, ValidationError};
pub use input::{
    AliasInput, AsyncConfigInput, CustomDomainInput, FunctionInput, ProvisionConfigInput,
    ServiceInput, TagResourceInput, TriggerInput, UntagResourceInput,
};
pub use operations::FcOperation;
pub use options::ListOptions;
pub use output::{FcResponse, REQUEST_ID_HEADER};
