//! JSON request payloads.
//!
//! Every payload serializes with `camelCase` keys and omits unset fields.
//! Fields the service accepts but that are not modelled here go into
//! `extra`, which is flattened into the top-level object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use typed_builder::TypedBuilder;

use crate::error::ValidationError;
use crate::types::{Code, DestinationConfig, LogConfig, NasConfig, VpcConfig};

/// Memory size applied to new functions when none is given, in MB.
pub const DEFAULT_MEMORY_SIZE: u32 = 256;

/// Timeout applied to new functions when none is given, in seconds.
pub const DEFAULT_FUNCTION_TIMEOUT: u32 = 60;

/// Service attributes for `create_service` / `update_service`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    /// Service name. Filled in from the call argument on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub service_name: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    /// RAM role assumed by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub role: Option<String>,
    /// Log delivery settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub log_config: Option<LogConfig>,
    /// VPC attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub vpc_config: Option<VpcConfig>,
    /// NAS mounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub nas_config: Option<NasConfig>,
    /// Whether functions may reach the public internet.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub internet_access: Option<bool>,
    /// Unmodelled fields.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: Map<String, Value>,
}

/// Function attributes for `create_function` / `update_function`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInput {
    /// Function name. Required on create, taken from the path on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub function_name: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    /// Runtime identifier, e.g. `python3.9`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub runtime: Option<String>,
    /// Entry point, e.g. `index.handler`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub handler: Option<String>,
    /// Initializer entry point.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub initializer: Option<String>,
    /// Initializer timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub initialization_timeout: Option<u32>,
    /// Memory size in MB.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub memory_size: Option<u32>,
    /// Execution timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub timeout: Option<u32>,
    /// Concurrent requests served by one instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub instance_concurrency: Option<u32>,
    /// Code package.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub code: Option<Code>,
    /// Environment variables exposed to the function.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub environment_variables: Option<BTreeMap<String, String>>,
    /// Unmodelled fields.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: Map<String, Value>,
}

impl FunctionInput {
    /// Check the fields `create_function` requires and fill in defaults.
    ///
    /// `functionName`, `runtime`, `handler` and `code` must be present;
    /// `memorySize` defaults to 256 and `timeout` to 60.
    ///
    /// ```
    /// use fcstack_model::FunctionInput;
    /// use fcstack_model::types::Code;
    ///
    /// let input = FunctionInput::builder()
    ///     .function_name("hello")
    ///     .runtime("python3.9")
    ///     .handler("index.handler")
    ///     .code(Code::from_oss("bucket", "hello.zip"))
    ///     .build()
    ///     .normalize_for_create()
    ///     .unwrap();
    /// assert_eq!(input.memory_size, Some(256));
    /// assert_eq!(input.timeout, Some(60));
    /// ```
    pub fn normalize_for_create(mut self) -> Result<Self, ValidationError> {
        require(self.function_name.as_deref(), "functionName")?;
        require(self.runtime.as_deref(), "runtime")?;
        require(self.handler.as_deref(), "handler")?;
        if self.code.is_none() {
            return Err(ValidationError::MissingField("code"));
        }
        self.memory_size.get_or_insert(DEFAULT_MEMORY_SIZE);
        self.timeout.get_or_insert(DEFAULT_FUNCTION_TIMEOUT);
        Ok(self)
    }
}

fn require(value: Option<&str>, field: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Trigger attributes for `create_trigger` / `update_trigger`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct TriggerInput {
    /// Trigger name. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub trigger_name: Option<String>,
    /// Trigger type: `oss`, `log`, `timer`, `http`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub trigger_type: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    /// ARN of the event source.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub source_arn: Option<String>,
    /// Role the event source assumes to invoke the function.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub invocation_role: Option<String>,
    /// Version or alias the trigger targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub qualifier: Option<String>,
    /// Type-specific configuration, passed through as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub trigger_config: Option<Value>,
    /// Unmodelled fields.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: Map<String, Value>,
}

/// Alias attributes for `create_alias` / `update_alias`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct AliasInput {
    /// Alias name. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub alias_name: Option<String>,
    /// Version the alias points to.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub version_id: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    /// Traffic weights for additional versions, keyed by version id.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub additional_version_weight: Option<BTreeMap<String, f64>>,
    /// Unmodelled fields.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: Map<String, Value>,
}

/// Payload of `tag_resource`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceInput {
    /// ARN of the resource, e.g. `acs:fc:{region}:{account}:services/{s}`.
    #[builder(setter(into))]
    pub resource_arn: String,
    /// Tags to attach.
    #[builder(default)]
    pub tags: BTreeMap<String, String>,
}

/// Payload of `untag_resource`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceInput {
    /// ARN of the resource.
    #[builder(setter(into))]
    pub resource_arn: String,
    /// Tag keys to remove.
    #[builder(default)]
    pub tag_keys: Vec<String>,
    /// Remove every tag, ignoring `tag_keys`.
    #[builder(default)]
    pub all: bool,
}

/// Payload of `put_provision_config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionConfigInput {
    /// Number of provisioned instances.
    pub target: u32,
    /// Unmodelled fields.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: Map<String, Value>,
}

/// Payload of `put_function_async_config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct AsyncConfigInput {
    /// Where invocation outcomes are delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub destination_config: Option<DestinationConfig>,
    /// Drop queued events older than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub max_async_event_age_in_seconds: Option<u32>,
    /// Retries after a failed async invocation.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub max_async_retry_attempts: Option<u32>,
    /// Unmodelled fields.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: Map<String, Value>,
}

/// Payload of `create_custom_domain` / `update_custom_domain`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CustomDomainInput {
    /// Domain name. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub domain_name: Option<String>,
    /// `HTTP` or `HTTP,HTTPS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub protocol: Option<String>,
    /// API version the domain routes to.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub api_version: Option<String>,
    /// Path routing table, passed through as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub route_config: Option<Value>,
    /// TLS certificate, passed through as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub cert_config: Option<Value>,
    /// Unmodelled fields.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: Map<String, Value>,
}
