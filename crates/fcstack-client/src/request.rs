//! Signed request assembly.
//!
//! Every call goes through [`RequestBuilder::build`]: default headers are
//! laid down, caller headers override them, the decoded path is signed and
//! the `authorization` header is attached last.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use fcstack_auth::{AUTHORIZATION_HEADER, Credential, Queries, Signer, unescape};
use fcstack_core::{Endpoint, FcConfig};
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, DATE, HOST, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use tracing::debug;

use crate::error::{FcError, FcResult};
use crate::transport::HttpRequest;

/// Header carrying the STS security token.
pub const SECURITY_TOKEN_HEADER: &str = "x-fc-security-token";

/// Content type sent unless the caller overrides it.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Whether query parameters take part in the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySigning {
    /// Sign the path alone; queries only go on the wire. Used by the
    /// management API.
    PathOnly,
    /// Sign the path plus the sorted queries, an empty set included. Used
    /// by HTTP trigger requests.
    WithQueries,
}

/// Format a timestamp as an RFC 1123 GMT date.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fcstack_client::request::http_date;
///
/// let at = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
/// assert_eq!(http_date(at), "Mon, 02 Jan 2006 15:04:05 GMT");
/// ```
#[must_use]
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Builds signed [`HttpRequest`]s for one account.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    signer: Signer,
    endpoint: Endpoint,
    api_version: String,
    user_agent: String,
}

impl RequestBuilder {
    /// Create a builder from client configuration.
    #[must_use]
    pub fn new(config: &FcConfig) -> Self {
        let credential = Credential::new(
            &config.access_key_id,
            &config.access_key_secret,
            config.security_token.as_deref(),
        );
        Self {
            signer: Signer::new(credential),
            endpoint: config.endpoint.clone(),
            api_version: config.api_version.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// The signer used for every request.
    #[must_use]
    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The API version path prefix.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Default headers for a request sent at `date`, with `custom` merged on
    /// top. A caller header replaces every default value of the same name.
    pub fn common_headers(&self, date: &str, custom: Option<&HeaderMap>) -> FcResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, header_value("host", self.endpoint.host())?);
        headers.insert(DATE, header_value("date", date)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
        headers.insert(USER_AGENT, header_value("user-agent", &self.user_agent)?);
        if let Some(token) = self.signer.credential().security_token() {
            headers.insert(
                HeaderName::from_static(SECURITY_TOKEN_HEADER),
                header_value(SECURITY_TOKEN_HEADER, token)?,
            );
        }

        if let Some(custom) = custom {
            for name in custom.keys() {
                headers.remove(name);
            }
            for (name, value) in custom {
                headers.append(name.clone(), value.clone());
            }
        }

        Ok(headers)
    }

    /// Assemble and sign a request.
    ///
    /// `path` is the wire path (already percent-encoded, API version
    /// included); it is decoded before signing. `queries` are rendered onto
    /// the URL in insertion order.
    pub fn build(
        &self,
        method: Method,
        path: &str,
        custom: Option<&HeaderMap>,
        body: Option<Bytes>,
        queries: Option<&Queries>,
        signing: QuerySigning,
    ) -> FcResult<HttpRequest> {
        let date = http_date(Utc::now());
        let mut headers = self.common_headers(&date, custom)?;

        let body = body.unwrap_or_default();
        if !body.is_empty() {
            headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        }

        let empty = Queries::new();
        let signed_queries = match signing {
            QuerySigning::PathOnly => None,
            QuerySigning::WithQueries => Some(queries.unwrap_or(&empty)),
        };

        let unescaped_path = unescape(path)?;
        let token = self
            .signer
            .sign(method.as_str(), &unescaped_path, &headers, signed_queries);
        headers.insert(
            HeaderName::from_static(AUTHORIZATION_HEADER),
            header_value(AUTHORIZATION_HEADER, token.as_str())?,
        );

        let mut url = format!("{}{path}", self.endpoint.url());
        if let Some(queries) = queries.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(&queries.to_query_string());
        }

        debug!(%method, %url, ?signing, "Built signed FC request");

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

fn header_value(name: &str, value: &str) -> FcResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| FcError::InvalidArgument(format!("invalid value for header `{name}`")))
}
