//! Requests to functions behind HTTP triggers.

use bytes::Bytes;
use fcstack_auth::Queries;
use http::{HeaderMap, Method};
use tracing::debug;

use crate::client::FcClient;
use crate::error::FcResult;
use crate::request::QuerySigning;
use crate::transport::{HttpResponse, Transport};

impl FcClient {
    /// Send a request to a function's HTTP trigger.
    ///
    /// `path` is appended to `/{version}/proxy/{service}/{function}` as given
    /// (percent-encoded, `/` when empty) and signed in decoded form together
    /// with `queries`; an absent query set is signed as an empty one.
    ///
    /// The raw response is returned whatever its status: an HTTP function
    /// owns its status codes.
    #[allow(clippy::too_many_arguments)]
    pub async fn do_http_request(
        &self,
        method: Method,
        service_name: &str,
        function_name: &str,
        path: &str,
        headers: Option<&HeaderMap>,
        queries: Option<&Queries>,
        body: Option<Bytes>,
    ) -> FcResult<HttpResponse> {
        let path = if path.is_empty() { "/" } else { path };
        let prefix = self.api_path(&format!("/proxy/{service_name}/{function_name}"));
        let full_path = format!("{prefix}{path}");

        let request = self.request_builder().build(
            method,
            &full_path,
            headers,
            body,
            queries,
            QuerySigning::WithQueries,
        )?;

        debug!(
            service = service_name,
            function = function_name,
            "Dispatching HTTP trigger request"
        );
        Ok(self.transport().send(request).await?)
    }
}
