//! Service CRUD.

use fcstack_core::qualified_name;
use fcstack_model::{FcOperation, FcResponse, ListOptions, ServiceInput};
use http::HeaderMap;

use crate::client::FcClient;
use crate::error::FcResult;

impl FcClient {
    /// Create a service named `service_name`.
    pub async fn create_service(
        &self,
        service_name: &str,
        input: &ServiceInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let mut payload = input.clone();
        payload.service_name = Some(service_name.to_owned());
        let path = self.api_path("/services");
        self.call_json(FcOperation::CreateService, &path, headers, &payload)
            .await
    }

    /// Update a service's attributes.
    pub async fn update_service(
        &self,
        service_name: &str,
        input: &ServiceInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/services/{service_name}"));
        self.call_json(FcOperation::UpdateService, &path, headers, input)
            .await
    }

    /// Delete a service. Pass `if-match` in `headers` to guard on an etag.
    pub async fn delete_service(
        &self,
        service_name: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!("/services/{service_name}"));
        self.call(FcOperation::DeleteService, &path, headers, None, None)
            .await
    }

    /// Get a service, optionally at a version or alias.
    pub async fn get_service(
        &self,
        service_name: &str,
        qualifier: Option<&str>,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let service = qualified_name(service_name, qualifier);
        let path = self.api_path(&format!("/services/{service}"));
        self.call(FcOperation::GetService, &path, headers, None, None)
            .await
    }

    /// List services.
    pub async fn list_services(
        &self,
        options: &ListOptions,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path("/services");
        let queries = options.to_queries();
        self.call(
            FcOperation::ListServices,
            &path,
            headers,
            None,
            Some(&queries),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use fcstack_model::{ListOptions, ServiceInput};
    use http::{HeaderMap, HeaderValue, Method};

    use crate::client::testing::{body_json, mock_client, path_of, query_of};

    #[tokio::test]
    async fn test_should_create_service_with_name_in_body() {
        let (client, transport) = mock_client();
        let input = ServiceInput::builder().description("demo service").build();

        client.create_service("demo", &input, None).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(path_of(&request), "/2016-08-15/services");
        assert_eq!(
            body_json(&request),
            serde_json::json!({"serviceName": "demo", "description": "demo service"})
        );
        assert_eq!(
            request.headers["content-length"],
            request.body.len().to_string().as_str()
        );
    }

    #[tokio::test]
    async fn test_should_update_service_without_name_in_body() {
        let (client, transport) = mock_client();
        let input = ServiceInput::builder().description("new").build();

        client.update_service("demo", &input, None).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(path_of(&request), "/2016-08-15/services/demo");
        assert_eq!(body_json(&request), serde_json::json!({"description": "new"}));
    }

    #[tokio::test]
    async fn test_should_get_qualified_service() {
        let (client, transport) = mock_client();
        client.get_service("demo", Some("prod"), None).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(path_of(&request), "/2016-08-15/services/demo.prod");
    }

    #[tokio::test]
    async fn test_should_forward_custom_headers_on_delete() {
        let (client, transport) = mock_client();
        let mut headers = HeaderMap::new();
        headers.insert("if-match", HeaderValue::from_static("etag-1"));

        client.delete_service("demo", Some(&headers)).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.headers["if-match"], "etag-1");
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn test_should_list_services_with_query_string() {
        let (client, transport) = mock_client();
        let options = ListOptions::builder().limit(2).next_token("abc").build();

        client.list_services(&options, None).await.unwrap();

        let request = transport.last_request();
        assert_eq!(path_of(&request), "/2016-08-15/services");
        assert_eq!(query_of(&request), Some("limit=2&nextToken=abc"));
    }
}
