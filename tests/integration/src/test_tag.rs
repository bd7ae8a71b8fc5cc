//! Resource tagging integration tests.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use fcstack_model::{TagResourceInput, UntagResourceInput};

    use crate::{cleanup_service, create_test_service, fc_client, service_arn};

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_tag_and_untag_service() -> anyhow::Result<()> {
        let client = fc_client();
        let service = create_test_service(&client, "tag").await;
        let arn = service_arn(&service);

        let tag = TagResourceInput::builder()
            .resource_arn(arn.clone())
            .tags(BTreeMap::from([
                ("k1".to_owned(), "v1".to_owned()),
                ("k3".to_owned(), "v3".to_owned()),
            ]))
            .build();
        client.tag_resource(&tag, None).await?;

        let tags = client.get_resource_tags(&arn, None).await?;
        assert_eq!(tags.data["resourceArn"], arn.as_str());
        assert_eq!(tags.data["tags"]["k1"], "v1");

        let untag = UntagResourceInput::builder()
            .resource_arn(arn.clone())
            .tag_keys(vec!["k3".to_owned()])
            .build();
        client.untag_resource(&untag, None).await?;

        let tags = client.get_resource_tags(&arn, None).await?;
        assert!(tags.data["tags"].get("k3").is_none());

        let untag_all = UntagResourceInput::builder()
            .resource_arn(arn.clone())
            .all(true)
            .build();
        client.untag_resource(&untag_all, None).await?;

        cleanup_service(&client, &service).await;
        Ok(())
    }
}
