//! Async invocation configuration.

use fcstack_core::qualified_name;
use fcstack_model::{AsyncConfigInput, FcOperation, FcResponse, ListOptions};
use http::HeaderMap;

use crate::client::FcClient;
use crate::error::FcResult;

impl FcClient {
    fn async_config_path(&self, service_name: &str, qualifier: &str, function_name: &str) -> String {
        let service = qualified_name(service_name, Some(qualifier));
        self.api_path(&format!(
            "/services/{service}/functions/{function_name}/async-invoke-config"
        ))
    }

    /// Configure async invocation (destinations, retries, event age).
    pub async fn put_function_async_config(
        &self,
        service_name: &str,
        qualifier: &str,
        function_name: &str,
        input: &AsyncConfigInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.async_config_path(service_name, qualifier, function_name);
        self.call_json(FcOperation::PutFunctionAsyncConfig, &path, headers, input)
            .await
    }

    /// Get the async invocation config.
    pub async fn get_function_async_config(
        &self,
        service_name: &str,
        qualifier: &str,
        function_name: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.async_config_path(service_name, qualifier, function_name);
        self.call(
            FcOperation::GetFunctionAsyncConfig,
            &path,
            headers,
            None,
            None,
        )
        .await
    }

    /// Delete the async invocation config.
    pub async fn delete_function_async_config(
        &self,
        service_name: &str,
        qualifier: &str,
        function_name: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.async_config_path(service_name, qualifier, function_name);
        self.call(
            FcOperation::DeleteFunctionAsyncConfig,
            &path,
            headers,
            None,
            None,
        )
        .await
    }

    /// List the async invocation configs of a function across qualifiers.
    pub async fn list_function_async_configs(
        &self,
        service_name: &str,
        function_name: &str,
        options: &ListOptions,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!(
            "/services/{service_name}/functions/{function_name}/async-invoke-configs"
        ));
        let queries = options.to_queries();
        self.call(
            FcOperation::ListFunctionAsyncConfigs,
            &path,
            headers,
            None,
            Some(&queries),
        )
        .await
    }
}
