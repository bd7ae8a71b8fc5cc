//! Service CRUD integration tests.

#[cfg(test)]
mod tests {
    use fcstack_model::{ListOptions, ServiceInput};

    use crate::{cleanup_service, create_test_service, fc_client};

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_create_get_and_delete_service() -> anyhow::Result<()> {
        let client = fc_client();
        let service = create_test_service(&client, "crud").await;

        let got = client.get_service(&service, None, None).await?;
        assert_eq!(got.data["serviceName"], service.as_str());
        assert!(got.request_id().is_some());

        cleanup_service(&client, &service).await;

        let err = client
            .get_service(&service, None, None)
            .await
            .expect_err("service should be gone");
        assert_eq!(err.status(), Some(404));
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_update_service_description() -> anyhow::Result<()> {
        let client = fc_client();
        let service = create_test_service(&client, "update").await;

        let input = ServiceInput::builder().description("updated").build();
        let updated = client.update_service(&service, &input, None).await?;
        assert_eq!(updated.data["description"], "updated");

        cleanup_service(&client, &service).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_page_through_services_by_prefix() -> anyhow::Result<()> {
        let client = fc_client();
        let first = create_test_service(&client, "page").await;
        let second = create_test_service(&client, "page").await;

        let options = ListOptions::builder().prefix("test_page_").limit(1).build();
        let page = client.list_services(&options, None).await?;
        assert_eq!(page.data["services"].as_array().map(Vec::len), Some(1));
        assert!(page.data["nextToken"].is_string());

        cleanup_service(&client, &first).await;
        cleanup_service(&client, &second).await;
        Ok(())
    }
}
