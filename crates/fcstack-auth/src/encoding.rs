//! Base64 helpers for signatures and URL-safe tokens.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};

/// Standard base64 (with `+`, `/` and padding), as used in the `authorization` token.
#[must_use]
pub fn base64_encode(bytes: impl AsRef<[u8]>) -> String {
    STANDARD.encode(bytes)
}

/// Base64 with `+` and `/` replaced by `-` and `_`. Padding is kept.
///
/// ```
/// use fcstack_auth::{base64_encode, base64_url_encode};
///
/// let bytes = [0xfb, 0xff, 0xbf];
/// assert_eq!(base64_encode(bytes), "+/+/");
/// assert_eq!(base64_url_encode(bytes), "-_-_");
/// ```
#[must_use]
pub fn base64_url_encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE.encode(bytes)
}
