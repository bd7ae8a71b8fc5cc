//! HTTP trigger integration tests.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use fcstack_auth::Queries;
    use fcstack_model::TriggerInput;
    use http::Method;
    use serde_json::json;

    use crate::{cleanup_service, create_test_service, fc_client, hello_function};

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_call_function_through_http_trigger() -> anyhow::Result<()> {
        let client = fc_client();
        let service = create_test_service(&client, "http").await;
        client
            .create_function(&service, &hello_function("web"), None)
            .await?;

        let trigger = TriggerInput::builder()
            .trigger_name("http")
            .trigger_type("http")
            .trigger_config(json!({"authType": "function", "methods": ["GET", "POST"]}))
            .build();
        client.create_trigger(&service, "web", &trigger, None).await?;

        let got = client.get_trigger(&service, "web", "http", None).await?;
        assert_eq!(got.data["triggerType"], "http");

        let queries = Queries::new().with("name", "fcstack").with("tag", vec!["a", "b"]);
        let response = client
            .do_http_request(
                Method::POST,
                &service,
                "web",
                "/action%20with%20space",
                None,
                Some(&queries),
                Some(Bytes::from_static(b"payload")),
            )
            .await?;
        assert_ne!(response.status.as_u16(), 403, "signature must verify");

        client.delete_trigger(&service, "web", "http", None).await?;
        cleanup_service(&client, &service).await;
        Ok(())
    }
}
