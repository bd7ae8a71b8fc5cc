//! Version, alias, provisioning and async config integration tests.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use fcstack_model::types::{Destination, DestinationConfig};
    use fcstack_model::{AliasInput, AsyncConfigInput, ListOptions};

    use crate::{cleanup_service, create_test_service, fc_client, hello_function};

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_publish_versions_and_route_alias() -> anyhow::Result<()> {
        let client = fc_client();
        let service = create_test_service(&client, "version").await;
        client
            .create_function(&service, &hello_function("hello"), None)
            .await?;

        let v1 = client
            .publish_version(&service, Some("v1"), None)
            .await?
            .data["versionId"]
            .as_str()
            .map(str::to_owned)
            .expect("versionId");

        let alias = AliasInput::builder()
            .alias_name("test")
            .version_id(v1.clone())
            .description("test alias")
            .build();
        let created = client.create_alias(&service, &alias, None).await?;
        assert_eq!(created.data["versionId"], v1.as_str());

        let got = client
            .get_function(&service, "hello", Some("test"), None)
            .await?;
        assert_eq!(got.data["functionName"], "hello");

        let update = AliasInput::builder()
            .version_id(v1.clone())
            .additional_version_weight(BTreeMap::new())
            .build();
        client.update_alias(&service, "test", &update, None).await?;

        let aliases = client
            .list_aliases(&service, &ListOptions::default(), None)
            .await?;
        assert_eq!(aliases.data["aliases"].as_array().map(Vec::len), Some(1));

        client.delete_alias(&service, "test", None).await?;
        client.delete_version(&service, &v1, None).await?;

        cleanup_service(&client, &service).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_manage_async_invoke_config() -> anyhow::Result<()> {
        let client = fc_client();
        let service = create_test_service(&client, "asynccfg").await;
        client
            .create_function(&service, &hello_function("hello"), None)
            .await?;

        let destination = format!("{}/functions/hello", crate::service_arn(&service));
        let input = AsyncConfigInput::builder()
            .destination_config(DestinationConfig {
                on_success: Some(Destination {
                    destination: destination.clone(),
                }),
                on_failure: None,
            })
            .max_async_event_age_in_seconds(100)
            .max_async_retry_attempts(1)
            .build();

        let put = client
            .put_function_async_config(&service, "LATEST", "hello", &input, None)
            .await?;
        assert_eq!(put.data["qualifier"], "LATEST");
        assert_eq!(put.data["maxAsyncRetryAttempts"], 1);

        let got = client
            .get_function_async_config(&service, "LATEST", "hello", None)
            .await?;
        assert_eq!(
            got.data["destinationConfig"]["onSuccess"]["destination"],
            destination.as_str()
        );

        let listed = client
            .list_function_async_configs(&service, "hello", &ListOptions::default(), None)
            .await?;
        assert_eq!(listed.data["configs"].as_array().map(Vec::len), Some(1));

        client
            .delete_function_async_config(&service, "LATEST", "hello", None)
            .await?;

        cleanup_service(&client, &service).await;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_list_reserved_capacities() -> anyhow::Result<()> {
        let client = fc_client();
        let options = ListOptions::builder().limit(5).build();

        let response = client.list_reserved_capacities(&options, None).await?;
        let count = response.data["reservedCapacities"]
            .as_array()
            .map_or(0, Vec::len);
        assert!(count <= 5);
        Ok(())
    }
}
