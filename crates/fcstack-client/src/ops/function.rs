//! Function CRUD, code download and invocation.

use bytes::Bytes;
use fcstack_core::qualified_name;
use fcstack_model::{FcOperation, FcResponse, FunctionInput, ListOptions};
use http::HeaderMap;

use crate::client::FcClient;
use crate::error::FcResult;

impl FcClient {
    /// Create a function in `service_name`.
    ///
    /// `functionName`, `runtime`, `handler` and `code` are required;
    /// `memorySize` defaults to 256 MB and `timeout` to 60 s.
    pub async fn create_function(
        &self,
        service_name: &str,
        input: &FunctionInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let payload = input.clone().normalize_for_create()?;
        let path = self.api_path(&format!("/services/{service_name}/functions"));
        self.call_json(FcOperation::CreateFunction, &path, headers, &payload)
            .await
    }

    /// Update a function. Only the fields set on `input` are sent.
    pub async fn update_function(
        &self,
        service_name: &str,
        function_name: &str,
        input: &FunctionInput,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let mut payload = input.clone();
        payload.function_name = None;
        let path = self.api_path(&format!(
            "/services/{service_name}/functions/{function_name}"
        ));
        self.call_json(FcOperation::UpdateFunction, &path, headers, &payload)
            .await
    }

    /// Delete a function.
    pub async fn delete_function(
        &self,
        service_name: &str,
        function_name: &str,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let path = self.api_path(&format!(
            "/services/{service_name}/functions/{function_name}"
        ));
        self.call(FcOperation::DeleteFunction, &path, headers, None, None)
            .await
    }

    /// Get a function, optionally at a version or alias.
    pub async fn get_function(
        &self,
        service_name: &str,
        function_name: &str,
        qualifier: Option<&str>,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let service = qualified_name(service_name, qualifier);
        let path = self.api_path(&format!("/services/{service}/functions/{function_name}"));
        self.call(FcOperation::GetFunction, &path, headers, None, None)
            .await
    }

    /// Get a function's code location and checksum.
    pub async fn get_function_code(
        &self,
        service_name: &str,
        function_name: &str,
        qualifier: Option<&str>,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let service = qualified_name(service_name, qualifier);
        let path = self.api_path(&format!(
            "/services/{service}/functions/{function_name}/code"
        ));
        self.call(FcOperation::GetFunctionCode, &path, headers, None, None)
            .await
    }

    /// List the functions of a service.
    pub async fn list_functions(
        &self,
        service_name: &str,
        qualifier: Option<&str>,
        options: &ListOptions,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let service = qualified_name(service_name, qualifier);
        let path = self.api_path(&format!("/services/{service}/functions"));
        let queries = options.to_queries();
        self.call(
            FcOperation::ListFunctions,
            &path,
            headers,
            None,
            Some(&queries),
        )
        .await
    }

    /// Invoke a function with a raw payload.
    ///
    /// Set `x-fc-invocation-type: Async` in `headers` for an asynchronous
    /// invocation. The function's output is returned in
    /// [`FcResponse::data`], as JSON when it parses and as a string otherwise.
    pub async fn invoke_function(
        &self,
        service_name: &str,
        function_name: &str,
        qualifier: Option<&str>,
        payload: impl Into<Bytes>,
        headers: Option<&HeaderMap>,
    ) -> FcResult<FcResponse> {
        let service = qualified_name(service_name, qualifier);
        let path = self.api_path(&format!(
            "/services/{service}/functions/{function_name}/invocations"
        ));
        let payload = payload.into();
        let body = (!payload.is_empty()).then_some(payload);
        self.call(FcOperation::InvokeFunction, &path, headers, body, None)
            .await
    }
}
