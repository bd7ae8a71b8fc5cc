//! Service versions.

use fcstack_model::{FcOperation, FcResponse, ListOptions};
use http::HeaderMap;
use serde_json::json;

use crate::client::FcClient;
use crate::error::FcResult;

impl FcClient {
    /// Publish the current state of a service as a new immutable version.
    pub async fn publish_version(
        &self,
        service_name: &str,
        description: Option<&str>,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/services/{service_name}/versions"));
        let payload = json!({ "description": description.unwrap_or_default() });
        self.call_json(FcOperation::PublishVersion, &path, headers, &payload)
            .await
    }

    /// List the published versions of a service.
    pub async fn list_versions(
        &self,
        service_name: &str,
        options: &ListOptions,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/services/{service_name}/versions"));
        let queries = options.to_queries();
        self.call(
            FcOperation::ListVersions,
            &path,
            headers,
            None,
            Some(&queries),
        )
        .await
    }

    /// Delete a version.
    pub async fn delete_version(
        &self,
        service_name: &str,
        version_id: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/services/{service_name}/versions/{version_id}"));
        self.call(FcOperation::DeleteVersion, &path, headers, None, None)
            .await
    }
}
