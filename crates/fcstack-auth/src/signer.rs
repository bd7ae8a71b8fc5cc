//! FC request signing.
//!
//! The `authorization` header has the format:
//!
//! ```text
//! FC <AccessKeyId>:<Signature>
//! ```
//!
//! Where `Signature = Base64(HMAC-SHA256(AccessKeySecret, StringToSign))` and
//! `StringToSign` is described in [`crate::canonical`].

use std::fmt;

use hmac::{Hmac, KeyInit, Mac};
use http::HeaderMap;
use sha2::Sha256;
use tracing::debug;

use crate::canonical::CanonicalRequest;
use crate::credentials::Credential;
use crate::encoding::base64_encode;
use crate::error::AuthError;
use crate::query::Queries;
use crate::unescape::unescape;

/// Scheme tag that prefixes every token.
pub const SIGNATURE_SCHEME: &str = "FC";

/// Header the token is sent under.
pub const AUTHORIZATION_HEADER: &str = "authorization";

type HmacSha256 = Hmac<Sha256>;

/// A signed `authorization` header value: `FC <id>:<signature>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorizationToken(String);

impl AuthorizationToken {
    /// The token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The base64 signature part of the token.
    #[must_use]
    pub fn signature(&self) -> &str {
        self.0.split_once(':').map_or("", |(_, signature)| signature)
    }

    /// Consume the token, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AuthorizationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AuthorizationToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Signs requests with a held [`Credential`].
///
/// `Signer` has no mutable state; a single instance can be shared freely
/// across threads and tasks.
///
/// # Examples
///
/// ```
/// use fcstack_auth::{Credential, Signer};
/// use http::HeaderMap;
///
/// let signer = Signer::new(Credential::new("akid", "secret", None));
/// let token = signer.sign("GET", "/2016-08-15/services", &HeaderMap::new(), None);
/// assert!(token.as_str().starts_with("FC akid:"));
/// ```
#[derive(Debug, Clone)]
pub struct Signer {
    credential: Credential,
}

impl Signer {
    /// Create a signer for `credential`.
    #[must_use]
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// The credential this signer holds.
    #[must_use]
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Build the canonical request without signing it.
    #[must_use]
    pub fn canonical_request(
        &self,
        method: &str,
        unescaped_path: &str,
        headers: &HeaderMap,
        unescaped_queries: Option<&Queries>,
    ) -> CanonicalRequest {
        CanonicalRequest::new(method, unescaped_path, headers, unescaped_queries)
    }

    /// Produce the `authorization` token for a request.
    ///
    /// `unescaped_path` must already be percent-decoded (see
    /// [`crate::unescape()`]). Passing `None` for the queries signs the path
    /// alone; passing a collection, even an empty one, appends the sorted
    /// query entries to the canonical resource.
    #[must_use]
    pub fn sign(
        &self,
        method: &str,
        unescaped_path: &str,
        headers: &HeaderMap,
        unescaped_queries: Option<&Queries>,
    ) -> AuthorizationToken {
        let canonical = self.canonical_request(method, unescaped_path, headers, unescaped_queries);

        debug!(
            method = %canonical.method,
            resource = ?canonical.canonical_resource,
            "Built FC canonical request"
        );

        let signature = compute_signature(self.credential.secret(), &canonical.string_to_sign());
        AuthorizationToken(format!(
            "{SIGNATURE_SCHEME} {}:{signature}",
            self.credential.access_key_id()
        ))
    }

    /// Sign an [`http`] request, decoding its wire path first.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidPathEncoding`] if the path does not decode
    /// to UTF-8.
    pub fn sign_request(
        &self,
        parts: &http::request::Parts,
        unescaped_queries: Option<&Queries>,
    ) -> Result<AuthorizationToken, AuthError> {
        let path = unescape(parts.uri.path())?;
        Ok(self.sign(
            parts.method.as_str(),
            &path,
            &parts.headers,
            unescaped_queries,
        ))
    }
}

/// Compute `Base64(HMAC-SHA256(secret, string_to_sign))`.
#[must_use]
pub fn compute_signature(secret: &[u8], string_to_sign: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can accept any key length");
    mac.update(string_to_sign);
    base64_encode(mac.finalize().into_bytes())
}
