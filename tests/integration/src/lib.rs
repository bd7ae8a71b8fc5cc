//! Integration tests for fcstack against a live Function Compute endpoint.
//!
//! These tests create and delete real resources. They read the account from
//! `FC_ENDPOINT`, `FC_ACCESS_KEY_ID` and `FC_ACCESS_KEY_SECRET` (plus
//! `FC_ACCOUNT_ID` and `FC_REGION` for tagging) and are marked `#[ignore]`
//! so they don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p fcstack-integration -- --ignored
//! ```

use std::sync::Once;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use fcstack_client::FcClient;
use fcstack_model::types::Code;
use fcstack_model::{FunctionInput, ListOptions, ServiceInput};
use tracing::{debug, info};

static INIT: Once = Once::new();

/// A zip archive holding `index.py`, whose handler returns `hello world`.
const HELLO_WORLD_ZIP: &str = "UEsDBBQAAAAIAAAAIVBBhpGhNgAAADYAAAAIAAAAaW5kZXgucHlLSU1TyEjMS8lJLdJILUvNK9FRSM7PK0mtKNG04lIAgqLUktKiPAX1jNScnHyF8vyinBR1LgBQSwECFAMUAAAACAAAACFQQYaRoTYAAAA2AAAACAAAAAAAAAAAAAAApAEAAAAAaW5kZXgucHlQSwUGAAAAAAEAAQA2AAAAXAAAAAAA";

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a client configured from the environment.
#[must_use]
pub fn fc_client() -> FcClient {
    init_tracing();
    FcClient::from_env().expect("FC_* environment variables must be set")
}

/// Generate a unique resource name for a test.
#[must_use]
pub fn test_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string()[..8].to_owned();
    format!("test_{prefix}_{id}")
}

/// ARN of a service, for the tagging API.
#[must_use]
pub fn service_arn(service_name: &str) -> String {
    let region = std::env::var("FC_REGION").unwrap_or_else(|_| "cn-hangzhou".to_owned());
    let account = std::env::var("FC_ACCOUNT_ID").unwrap_or_default();
    format!("acs:fc:{region}:{account}:services/{service_name}")
}

/// Payload for a python function serving [`HELLO_WORLD_ZIP`].
#[must_use]
pub fn hello_function(function_name: &str) -> FunctionInput {
    let zip = STANDARD
        .decode(HELLO_WORLD_ZIP)
        .expect("embedded archive is valid base64");
    FunctionInput::builder()
        .function_name(function_name)
        .runtime("python3.9")
        .handler("index.handler")
        .memory_size(128)
        .code(Code::from_zip(zip))
        .build()
}

/// Create a service and return its name. Caller is responsible for cleanup.
pub async fn create_test_service(client: &FcClient, prefix: &str) -> String {
    let name = test_name(prefix);
    let input = ServiceInput::builder()
        .description("fcstack integration test")
        .build();
    client
        .create_service(&name, &input, None)
        .await
        .unwrap_or_else(|e| panic!("failed to create service {name}: {e}"));
    info!(service = %name, "Created test service");
    name
}

/// Delete everything inside a service, then the service itself.
pub async fn cleanup_service(client: &FcClient, service_name: &str) {
    let all = ListOptions::builder().limit(100).build();

    if let Ok(aliases) = client.list_aliases(service_name, &all, None).await {
        for alias in aliases.data["aliases"].as_array().into_iter().flatten() {
            if let Some(name) = alias["aliasName"].as_str() {
                let _ = client.delete_alias(service_name, name, None).await;
            }
        }
    }

    if let Ok(versions) = client.list_versions(service_name, &all, None).await {
        for version in versions.data["versions"].as_array().into_iter().flatten() {
            if let Some(id) = version["versionId"].as_str() {
                let _ = client.delete_version(service_name, id, None).await;
            }
        }
    }

    if let Ok(functions) = client.list_functions(service_name, None, &all, None).await {
        for function in functions.data["functions"].as_array().into_iter().flatten() {
            let Some(function_name) = function["functionName"].as_str() else {
                continue;
            };
            if let Ok(triggers) = client
                .list_triggers(service_name, function_name, &all, None)
                .await
            {
                for trigger in triggers.data["triggers"].as_array().into_iter().flatten() {
                    if let Some(name) = trigger["triggerName"].as_str() {
                        let _ = client
                            .delete_trigger(service_name, function_name, name, None)
                            .await;
                    }
                }
            }
            debug!(service = service_name, function = function_name, "Deleting test function");
            let _ = client
                .delete_function(service_name, function_name, None)
                .await;
        }
    }

    match client.delete_service(service_name, None).await {
        Ok(_) => info!(service = service_name, "Cleaned up test service"),
        Err(e) => debug!(service = service_name, error = %e, "Failed to delete test service"),
    }
}

mod test_error;
mod test_function;
mod test_http_trigger;
mod test_service;
mod test_tag;
mod test_versioning;
