//! Function CRUD and invocation integration tests.

#[cfg(test)]
mod tests {
    use fcstack_model::{FunctionInput, ListOptions};
    use http::{HeaderMap, HeaderValue};

    use crate::{cleanup_service, create_test_service, fc_client, hello_function};

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_create_invoke_and_delete_function() -> anyhow::Result<()> {
        let client = fc_client();
        let service = create_test_service(&client, "func").await;

        let created = client
            .create_function(&service, &hello_function("hello"), None)
            .await?;
        assert_eq!(created.data["functionName"], "hello");
        assert_eq!(created.data["memorySize"], 128);
        assert_eq!(created.data["timeout"], 60);

        let output = client
            .invoke_function(&service, "hello", None, "{}", None)
            .await?;
        assert_eq!(output.data, "hello world");

        let code = client
            .get_function_code(&service, "hello", None, None)
            .await?;
        assert!(code.data["url"].is_string());

        let listed = client
            .list_functions(&service, None, &ListOptions::default(), None)
            .await?;
        assert_eq!(listed.data["functions"].as_array().map(Vec::len), Some(1));

        cleanup_service(&client, &service).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_invoke_asynchronously() -> anyhow::Result<()> {
        let client = fc_client();
        let service = create_test_service(&client, "async").await;
        client
            .create_function(&service, &hello_function("hello"), None)
            .await?;

        let mut headers = HeaderMap::new();
        headers.insert("x-fc-invocation-type", HeaderValue::from_static("Async"));
        let response = client
            .invoke_function(&service, "hello", None, "{}", Some(&headers))
            .await?;
        assert_eq!(response.status.as_u16(), 202);
        assert!(response.request_id().is_some());

        cleanup_service(&client, &service).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_update_function_with_etag() -> anyhow::Result<()> {
        let client = fc_client();
        let service = create_test_service(&client, "etag").await;
        client
            .create_function(&service, &hello_function("hello"), None)
            .await?;

        let update = FunctionInput::builder().description("v2").build();
        let updated = client
            .update_function(&service, "hello", &update, None)
            .await?;
        assert_eq!(updated.data["description"], "v2");

        let etag = updated.headers.get("etag").cloned().expect("etag header");
        let mut headers = HeaderMap::new();
        headers.insert("if-match", etag);
        client
            .delete_function(&service, "hello", Some(&headers))
            .await?;

        cleanup_service(&client, &service).await;
        Ok(())
    }
}
