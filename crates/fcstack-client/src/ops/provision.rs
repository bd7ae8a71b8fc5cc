//! Provisioned instances and reserved capacity.

use fcstack_core::qualified_name;
use fcstack_model::{FcOperation, FcResponse, ListOptions, ProvisionConfigInput};
use http::HeaderMap;

use crate::client::FcClient;
use crate::error::FcResult;

impl FcClient {
    fn provision_path(&self, service_name: &str, qualifier: &str, function_name: &str) -> String {
        let service = qualified_name(service_name, Some(qualifier));
        self.api_path(&format!(
            "/services/{service}/functions/{function_name}/provision-config"
        ))
    }

    /// Set the number of provisioned instances for a function alias.
    pub async fn put_provision_config(
        &self,
        service_name: &str,
        qualifier: &str,
        function_name: &str,
        input: &ProvisionConfigInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.provision_path(service_name, qualifier, function_name);
        self.call_json(FcOperation::PutProvisionConfig, &path, headers, input)
            .await
    }

    /// Get the provisioned instance config of a function alias.
    pub async fn get_provision_config(
        &self,
        service_name: &str,
        qualifier: &str,
        function_name: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.provision_path(service_name, qualifier, function_name);
        self.call(FcOperation::GetProvisionConfig, &path, headers, None, None)
            .await
    }

    /// List provision configs, optionally for one service and qualifier.
    pub async fn list_provision_configs(
        &self,
        service_name: Option<&str>,
        qualifier: Option<&str>,
        options: &ListOptions,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path("/provision-configs");
        let mut queries = options.to_queries();
        if let Some(service_name) = service_name {
            queries.insert("serviceName", service_name);
        }
        if let Some(qualifier) = qualifier {
            queries.insert("qualifier", qualifier);
        }
        self.call(
            FcOperation::ListProvisionConfigs,
            &path,
            headers,
            None,
            Some(&queries),
        )
        .await
    }

    /// List the account's reserved capacities.
    pub async fn list_reserved_capacities(
        &self,
        options: &ListOptions,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path("/reservedCapacities");
        let queries = options.to_queries();
        self.call(
            FcOperation::ListReservedCapacities,
            &path,
            headers,
            None,
            Some(&queries),
        )
        .await
    }
}
