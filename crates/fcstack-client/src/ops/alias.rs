//! Alias CRUD.

use fcstack_model::{AliasInput, FcOperation, FcResponse, ListOptions};
use http::HeaderMap;

use crate::client::FcClient;
use crate::error::FcResult;

impl FcClient {
    /// Create an alias pointing at a version.
    pub async fn create_alias(
        &self,
        service_name: &str,
        input: &AliasInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/services/{service_name}/aliases"));
        self.call_json(FcOperation::CreateAlias, &path, headers, input)
            .await
    }

    /// Update an alias.
    pub async fn update_alias(
        &self,
        service_name: &str,
        alias_name: &str,
        input: &AliasInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/services/{service_name}/aliases/{alias_name}"));
        self.call_json(FcOperation::UpdateAlias, &path, headers, input)
            .await
    }

    /// Delete an alias.
    pub async fn delete_alias(
        &self,
        service_name: &str,
        alias_name: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/services/{service_name}/aliases/{alias_name}"));
        self.call(FcOperation::DeleteAlias, &path, headers, None, None)
            .await
    }

    /// Get an alias.
    pub async fn get_alias(
        &self,
        service_name: &str,
        alias_name: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/services/{service_name}/aliases/{alias_name}"));
        self.call(FcOperation::GetAlias, &path, headers, None, None)
            .await
    }

    /// List the aliases of a service.
    pub async fn list_aliases(
        &self,
        service_name: &str,
        options: &ListOptions,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/services/{service_name}/aliases"));
        let queries = options.to_queries();
        self.call(
            FcOperation::ListAliases,
            &path,
            headers,
            None,
            Some(&queries),
        )
        .await
    }
}
