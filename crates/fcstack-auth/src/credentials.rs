//! Access key credentials used to sign FC requests.

use std::fmt;

/// An FC access key pair with an optional STS security token.
///
/// All fields are trimmed on construction and immutable afterwards. The
/// `Debug` output never includes the secret or the token.
///
/// # Examples
///
/// ```
/// use fcstack_auth::Credential;
///
/// let credential = Credential::new(" akid ", "secret", None);
/// assert_eq!(credential.access_key_id(), "akid");
/// assert!(credential.security_token().is_none());
/// assert!(!format!("{credential:?}").contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    access_key_id: String,
    access_key_secret: String,
    security_token: Option<String>,
}

impl Credential {
    /// Create a new credential. An empty security token is treated as absent.
    pub fn new(
        access_key_id: impl AsRef<str>,
        access_key_secret: impl AsRef<str>,
        security_token: Option<&str>,
    ) -> Self {
        let security_token = security_token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(ToOwned::to_owned);

        Self {
            access_key_id: access_key_id.as_ref().trim().to_owned(),
            access_key_secret: access_key_secret.as_ref().trim().to_owned(),
            security_token,
        }
    }

    /// The access key identifier placed in the authorization token.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The STS security token, if this is a temporary credential.
    #[must_use]
    pub fn security_token(&self) -> Option<&str> {
        self.security_token.as_deref()
    }

    pub(crate) fn secret(&self) -> &[u8] {
        self.access_key_secret.as_bytes()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"***")
            .field("security_token", &self.security_token.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_trim_credential_fields() {
        let credential = Credential::new("  id\n", "\tsecret ", Some(" token "));
        assert_eq!(credential.access_key_id(), "id");
        assert_eq!(credential.secret(), b"secret");
        assert_eq!(credential.security_token(), Some("token"));
    }

    #[test]
    fn test_should_treat_blank_security_token_as_absent() {
        let credential = Credential::new("id", "secret", Some("   "));
        assert!(credential.security_token().is_none());
    }

    #[test]
    fn test_should_redact_secret_in_debug_output() {
        let credential = Credential::new("id", "very-secret", Some("sts-token"));
        let debug = format!("{credential:?}");
        assert!(debug.contains("id"));
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("sts-token"));
    }
}
