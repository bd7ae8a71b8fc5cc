//! The Function Compute API client.
//!
//! [`FcClient`] owns a [`RequestBuilder`] and a [`Transport`]. The API
//! methods are grouped by resource in the `ops` module; each of them goes
//! through [`FcClient::call`], which signs, sends and maps the status code.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use fcstack_auth::{Queries, escape_path};
use fcstack_core::FcConfig;
use fcstack_model::{FcOperation, FcResponse, REQUEST_ID_HEADER, ServiceError};
use http::HeaderMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::FcResult;
use crate::request::{QuerySigning, RequestBuilder};
use crate::transport::{ReqwestTransport, Transport};

/// Client for the Function Compute management API.
///
/// Cloning is cheap; clones share the signer and the connection pool.
///
/// # Examples
///
/// ```no_run
/// use fcstack_client::FcClient;
/// use fcstack_core::FcConfig;
/// use fcstack_model::ListOptions;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FcConfig::new("123456.cn-hangzhou.fc.aliyuncs.com", "akid", "secret")?;
/// let client = FcClient::new(config)?;
/// let services = client.list_services(&ListOptions::default(), None).await?;
/// println!("{}", services.data);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FcClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for FcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FcClient")
            .field("endpoint", self.inner.builder.endpoint())
            .field("api_version", &self.inner.builder.api_version())
            .field("transport", &self.inner.transport)
            .finish_non_exhaustive()
    }
}

impl FcClient {
    /// Create a client that sends requests with `reqwest`.
    pub fn new(config: FcConfig) -> FcResult<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client from `FC_*` environment variables.
    pub fn from_env() -> FcResult<Self> {
        Self::new(FcConfig::from_env()?)
    }

    /// Create a client with a custom transport.
    #[must_use]
    pub fn with_transport(config: FcConfig, transport: impl Transport + 'static) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                builder: RequestBuilder::new(&config),
                transport: Arc::new(transport),
            }),
        }
    }

    /// The request builder, for callers that send requests themselves.
    #[must_use]
    pub fn request_builder(&self) -> &RequestBuilder {
        &self.inner.builder
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.inner.transport.as_ref()
    }

    /// Wire path for an API resource: the version prefix plus `resource`,
    /// percent-encoded.
    pub(crate) fn api_path(&self, resource: &str) -> String {
        escape_path(&format!("/{}{resource}", self.inner.builder.api_version()))
    }

    /// Sign and send one management API call.
    ///
    /// `queries` go on the wire but are not signed.
    pub(crate) async fn call(
        &self,
        operation: FcOperation,
        path: &str,
        headers: Option<&HeaderMap>,
        body: Option<Bytes>,
        queries: Option<&Queries>,
    ) -> FcResult<FcResponse> {
        let request = self.inner.builder.build(
            operation.method(),
            path,
            headers,
            body,
            queries,
            QuerySigning::PathOnly,
        )?;

        debug!(%operation, %path, "Dispatching FC operation");
        let response = self.inner.transport.send(request).await?;

        let request_id = response
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        if let Some(err) =
            ServiceError::from_response(response.status.as_u16(), request_id, &response.body)
        {
            warn!(
                %operation,
                status = err.status,
                request_id = ?err.request_id,
                error_code = ?err.error_code,
                "FC operation failed"
            );
            return Err(err.into());
        }

        Ok(FcResponse::from_parts(
            response.status,
            response.headers,
            response.body,
        ))
    }

    /// [`FcClient::call`] with a JSON body.
    pub(crate) async fn call_json<T: Serialize + ?Sized>(
        &self,
        operation: FcOperation,
        path: &str,
        headers: Option<&HeaderMap>,
        payload: &T,
    ) -> FcResult<FcResponse> {
        let body = Bytes::from(serde_json::to_vec(payload)?);
        self.call(operation, path, headers, Some(body), None).await
    }
}
