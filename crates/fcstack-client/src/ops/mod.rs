//! API operations, one submodule per resource family.
//!
//! Each submodule adds methods to [`crate::FcClient`]. Every method takes
//! optional caller headers (e.g. `x-fc-trace-id`, `if-match`) that override
//! the defaults before signing.

mod alias;
mod async_config;
mod custom_domain;
mod function;
mod http_trigger;
mod provision;
mod service;
mod tag;
mod trigger;
mod version;
