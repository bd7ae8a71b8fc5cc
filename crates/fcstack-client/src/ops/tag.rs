//! Resource tagging.

use fcstack_auth::Queries;
use fcstack_model::{FcOperation, FcResponse, TagResourceInput, UntagResourceInput};
use http::HeaderMap;

use crate::client::FcClient;
use crate::error::FcResult;

impl FcClient {
    /// Attach tags to a resource.
    pub async fn tag_resource(
        &self,
        input: &TagResourceInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path("/tag");
        self.call_json(FcOperation::TagResource, &path, headers, input)
            .await
    }

    /// Remove tags from a resource. The keys travel in a `DELETE` body.
    pub async fn untag_resource(
        &self,
        input: &UntagResourceInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path("/tag");
        self.call_json(FcOperation::UntagResource, &path, headers, input)
            .await
    }

    /// Get the tags attached to a resource.
    pub async fn get_resource_tags(
        &self,
        resource_arn: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path("/tag");
        let queries = Queries::new().with("resourceArn", resource_arn);
        self.call(
            FcOperation::GetResourceTags,
            &path,
            headers,
            None,
            Some(&queries),
        )
        .await
    }
}
