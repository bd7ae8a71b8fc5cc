//! Custom domain CRUD.

use fcstack_model::{CustomDomainInput, FcOperation, FcResponse, ListOptions};
use http::HeaderMap;

use crate::client::FcClient;
use crate::error::FcResult;

impl FcClient {
    /// Bind a custom domain.
    pub async fn create_custom_domain(
        &self,
        input: &CustomDomainInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path("/custom-domains");
        self.call_json(FcOperation::CreateCustomDomain, &path, headers, input)
            .await
    }

    /// Update a custom domain's routes, protocol or certificate.
    pub async fn update_custom_domain(
        &self,
        domain_name: &str,
        input: &CustomDomainInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/custom-domains/{domain_name}"));
        self.call_json(FcOperation::UpdateCustomDomain, &path, headers, input)
            .await
    }

    /// Unbind a custom domain.
    pub async fn delete_custom_domain(
        &self,
        domain_name: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/custom-domains/{domain_name}"));
        self.call(FcOperation::DeleteCustomDomain, &path, headers, None, None)
            .await
    }

    /// Get a custom domain.
    pub async fn get_custom_domain(
        &self,
        domain_name: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/custom-domains/{domain_name}"));
        self.call(FcOperation::GetCustomDomain, &path, headers, None, None)
            .await
    }

    /// List custom domains.
    pub async fn list_custom_domains(
        &self,
        options: &ListOptions,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path("/custom-domains");
        let queries = options.to_queries();
        self.call(
            FcOperation::ListCustomDomains,
            &path,
            headers,
            None,
            Some(&queries),
        )
        .await
    }
}
