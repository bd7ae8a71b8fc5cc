//! Trigger CRUD.

use fcstack_model::{FcOperation, FcResponse, ListOptions, TriggerInput};
use http::HeaderMap;

use crate::client::FcClient;
use crate::error::FcResult;

impl FcClient {
    fn trigger_path(&self, service_name: &str, function_name: &str, rest: &str) -> String {
        self.api_path(&format!(
            "/services/{service_name}/functions/{function_name}/triggers{rest}"
        ))
    }

    /// Create a trigger on a function.
    pub async fn create_trigger(
        &self,
        service_name: &str,
        function_name: &str,
        input: &TriggerInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.trigger_path(service_name, function_name, "");
        self.call_json(FcOperation::CreateTrigger, &path, headers, input)
            .await
    }

    /// Update a trigger.
    pub async fn update_trigger(
        &self,
        service_name: &str,
        function_name: &str,
        trigger_name: &str,
        input: &TriggerInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.trigger_path(service_name, function_name, &format!("/{trigger_name}"));
        self.call_json(FcOperation::UpdateTrigger, &path, headers, input)
            .await
    }

    /// Delete a trigger.
    pub async fn delete_trigger(
        &self,
        service_name: &str,
        function_name: &str,
        trigger_name: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.trigger_path(service_name, function_name, &format!("/{trigger_name}"));
        self.call(FcOperation::DeleteTrigger, &path, headers, None, None)
            .await
    }

    /// Get a trigger.
    pub async fn get_trigger(
        &self,
        service_name: &str,
        function_name: &str,
        trigger_name: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.trigger_path(service_name, function_name, &format!("/{trigger_name}"));
        self.call(FcOperation::GetTrigger, &path, headers, None, None)
            .await
    }

    /// List the triggers of a function.
    pub async fn list_triggers(
        &self,
        service_name: &str,
        function_name: &str,
        options: &ListOptions,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.trigger_path(service_name, function_name, "");
        let queries = options.to_queries();
        self.call(
            FcOperation::ListTriggers,
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
    use fcstack_model::{ListOptions, TriggerInput};
    use http::Method;
    use serde_json::json;

    use crate::client::testing::{body_json, mock_client, path_of, query_of};

    #[tokio::test]
    async fn test_should_create_trigger_with_passthrough_config() {
        let (client, transport) = mock_client();
        let input = TriggerInput::builder()
            .trigger_name("every-minute")
            .trigger_type("timer")
            .trigger_config(json!({"cronExpression": "@every 1m", "enable": true}))
            .build();

        client.create_trigger("svc", "fn", &input, None).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            path_of(&request),
            "/2016-08-15/services/svc/functions/fn/triggers"
        );
        assert_eq!(
            body_json(&request),
            json!({
                "triggerName": "every-minute",
                "triggerType": "timer",
                "triggerConfig": {"cronExpression": "@every 1m", "enable": true}
            })
        );
    }

    #[tokio::test]
    async fn test_should_route_trigger_operations_by_name() {
        let (client, transport) = mock_client();
        let update = TriggerInput::builder().description("updated").build();

        client
            .update_trigger("svc", "fn", "t1", &update, None)
            .await
            .unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            path_of(&request),
            "/2016-08-15/services/svc/functions/fn/triggers/t1"
        );

        client.get_trigger("svc", "fn", "t1", None).await.unwrap();
        assert_eq!(transport.last_request().method, Method::GET);

        client.delete_trigger("svc", "fn", "t1", None).await.unwrap();
        assert_eq!(transport.last_request().method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_should_list_triggers_with_paging() {
        let (client, transport) = mock_client();
        let options = ListOptions::builder().limit(2).build();

        client.list_triggers("svc", "fn", &options, None).await.unwrap();

        let request = transport.last_request();
        assert_eq!(query_of(&request), Some("limit=2"));
    }
}
