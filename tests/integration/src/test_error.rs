//! Error mapping integration tests.

#[cfg(test)]
mod tests {
    use fcstack_client::{FcClient, FcError};
    use fcstack_core::FcConfig;
    use fcstack_model::ErrorKind;

    use crate::{fc_client, test_name};

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_report_missing_service_as_client_error() {
        let client = fc_client();
        let missing = test_name("missing");

        let err = client
            .get_service(&missing, None, None)
            .await
            .expect_err("service does not exist");

        let service_err = err.as_service_error().expect("service error");
        assert_eq!(service_err.kind, ErrorKind::Client);
        assert_eq!(service_err.status, 404);
        assert_eq!(service_err.error_code.as_deref(), Some("ServiceNotFound"));
        assert!(service_err.request_id.is_some());
    }

    #[tokio::test]
    #[ignore = "requires live endpoint"]
    async fn test_should_reject_bad_signature() {
        let base = FcConfig::from_env().expect("FC_* environment variables must be set");
        let config = FcConfig::new(
            &base.endpoint.to_string(),
            base.access_key_id,
            "not-the-secret",
        )
        .expect("config");
        let client = FcClient::new(config).expect("client");

        let err = client
            .list_services(&fcstack_model::ListOptions::default(), None)
            .await
            .expect_err("signature must not verify");

        assert!(matches!(err, FcError::Service(ref e) if e.status == 403));
    }
}
