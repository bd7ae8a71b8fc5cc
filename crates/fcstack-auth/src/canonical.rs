//! Canonical request construction for FC request signing.
//!
//! The string to sign is:
//!
//! ```text
//! HTTP-Verb + "\n" +
//! Content-MD5 + "\n" +
//! Content-Type + "\n" +
//! Date + "\n" +
//! CanonicalizedFCHeaders +
//! CanonicalizedResource
//! ```
//!
//! `CanonicalizedFCHeaders` holds only `x-fc-*` headers. `CanonicalizedResource`
//! is the unescaped path, followed by the sorted query entries when queries
//! take part in the signature.
//!
//! Header values are raw bytes: `HeaderValue` admits obs-text (0x80-0xFF), and
//! the server signs exactly what it receives.

use std::collections::BTreeMap;
use std::fmt;

use http::HeaderMap;

use crate::query::Queries;

/// Prefix selecting the provider headers that take part in the signature.
pub const HEADER_PREFIX: &str = "x-fc-";

/// The normalized components of a request, ready to be signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    /// Uppercased HTTP method.
    pub method: String,
    /// Value of `content-md5`, or empty.
    pub content_md5: Vec<u8>,
    /// Value of `content-type`, or empty.
    pub content_type: Vec<u8>,
    /// Value of `date`, or empty.
    pub date: Vec<u8>,
    /// Sorted `name:value\n` lines for every `x-fc-*` header.
    pub canonical_headers: Vec<u8>,
    /// Path, plus sorted query entries when queries are signed.
    pub canonical_resource: String,
}

impl CanonicalRequest {
    /// Normalize a request into its canonical form.
    ///
    /// # Examples
    ///
    /// ```
    /// use fcstack_auth::CanonicalRequest;
    /// use http::HeaderMap;
    ///
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", "application/json".parse().unwrap());
    /// headers.insert("X-Fc-Trace-Id", "abc".parse().unwrap());
    ///
    /// let canonical = CanonicalRequest::new("get", "/2016-08-15/services", &headers, None);
    /// assert_eq!(
    ///     canonical.string_to_sign(),
    ///     b"GET\n\napplication/json\n\nx-fc-trace-id:abc\n/2016-08-15/services"
    /// );
    /// ```
    #[must_use]
    pub fn new(
        method: &str,
        unescaped_path: &str,
        headers: &HeaderMap,
        unescaped_queries: Option<&Queries>,
    ) -> Self {
        Self {
            method: method.to_ascii_uppercase(),
            content_md5: header_value(headers, "content-md5"),
            content_type: header_value(headers, "content-type"),
            date: header_value(headers, "date"),
            canonical_headers: build_canonical_headers(headers),
            canonical_resource: build_canonical_resource(unescaped_path, unescaped_queries),
        }
    }

    /// Compose the exact bytes that are HMAC'd.
    #[must_use]
    pub fn string_to_sign(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(
            self.method.len()
                + self.content_md5.len()
                + self.content_type.len()
                + self.date.len()
                + self.canonical_headers.len()
                + self.canonical_resource.len()
                + 4,
        );
        for slot in [
            self.method.as_bytes(),
            &self.content_md5,
            &self.content_type,
            &self.date,
        ] {
            buf.extend_from_slice(slot);
            buf.push(b'\n');
        }
        buf.extend_from_slice(&self.canonical_headers);
        buf.extend_from_slice(self.canonical_resource.as_bytes());
        buf
    }
}

/// Lossy rendering for logs and tests; bytes outside UTF-8 show as U+FFFD.
impl fmt::Display for CanonicalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.string_to_sign()))
    }
}

/// Build the `CanonicalizedFCHeaders` block.
///
/// Header names are lowercased, values trimmed, and entries sorted by name.
/// A name sent more than once contributes its last value only. Every entry
/// ends with `\n`.
#[must_use]
pub fn build_canonical_headers(headers: &HeaderMap) -> Vec<u8> {
    let mut fc_headers: BTreeMap<&str, &[u8]> = BTreeMap::new();

    // `HeaderName` is always lowercase.
    for (name, value) in headers {
        if name.as_str().starts_with(HEADER_PREFIX) {
            fc_headers.insert(name.as_str(), value.as_bytes().trim_ascii());
        }
    }

    let mut result = Vec::new();
    for (name, value) in fc_headers {
        result.extend_from_slice(name.as_bytes());
        result.push(b':');
        result.extend_from_slice(value);
        result.push(b'\n');
    }

    result
}

/// Build the `CanonicalizedResource` string.
///
/// Without queries this is the path itself. With queries it is the path, a
/// newline, and the sorted entries joined by newlines.
///
/// ```
/// use fcstack_auth::{Queries, QueryValue};
/// use fcstack_auth::canonical::build_canonical_resource;
///
/// let queries = Queries::new().with("b", "2").with("a", QueryValue::Flag);
/// assert_eq!(build_canonical_resource("/p", Some(&queries)), "/p\na\nb=2");
/// assert_eq!(build_canonical_resource("/p", None), "/p");
/// ```
#[must_use]
pub fn build_canonical_resource(unescaped_path: &str, unescaped_queries: Option<&Queries>) -> String {
    match unescaped_queries {
        None => unescaped_path.to_owned(),
        Some(queries) => format!("{unescaped_path}\n{}", queries.canonical_entries().join("\n")),
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Vec<u8> {
    headers
        .get(name)
        .map(|v| v.as_bytes().to_vec())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;
    use crate::query::QueryValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_should_select_only_prefixed_headers() {
        let map = headers(&[
            ("x-fc-trace-id", "t-1"),
            ("x-fc-account-id", "123"),
            ("user-agent", "ua"),
            ("foo", "bar"),
            ("x-fcx-other", "nope"),
        ]);
        assert_eq!(
            build_canonical_headers(&map),
            b"x-fc-account-id:123\nx-fc-trace-id:t-1\n"
        );
    }

    #[test]
    fn test_should_trim_values_and_keep_last_repeated_header() {
        let map = headers(&[("x-fc-tag", "  a "), ("x-fc-tag", "b\t")]);
        assert_eq!(build_canonical_headers(&map), b"x-fc-tag:b\n");
    }

    #[test]
    fn test_should_keep_non_ascii_header_bytes() {
        let mut map = HeaderMap::new();
        map.insert(
            "x-fc-custom",
            HeaderValue::from_bytes("h\u{e9}llo".as_bytes()).unwrap(),
        );
        map.insert(
            "content-type",
            HeaderValue::from_bytes(b"text/plain; name=\xff").unwrap(),
        );

        assert_eq!(
            build_canonical_headers(&map),
            "x-fc-custom:h\u{e9}llo\n".as_bytes()
        );
        let canonical = CanonicalRequest::new("GET", "/x", &map, None);
        assert_eq!(canonical.content_type, b"text/plain; name=\xff");
        assert!(canonical.string_to_sign().ends_with("x-fc-custom:h\u{e9}llo\n/x".as_bytes()));
    }

    #[test]
    fn test_should_return_empty_block_without_fc_headers() {
        let map = headers(&[("host", "example.com")]);
        assert!(build_canonical_headers(&map).is_empty());
    }

    #[test]
    fn test_should_end_resource_with_newline_for_empty_queries() {
        assert_eq!(build_canonical_resource("/path", Some(&Queries::new())), "/path\n");
    }

    #[test]
    fn test_should_default_missing_slots_to_empty() {
        let canonical = CanonicalRequest::new("delete", "/x", &HeaderMap::new(), None);
        assert_eq!(canonical.string_to_sign(), b"DELETE\n\n\n\n/x");
    }

    #[test]
    fn test_should_compose_full_string_to_sign() {
        let map = headers(&[
            ("content-md5", "md5=="),
            ("content-type", "text/plain"),
            ("date", "Mon, 02 Jan 2006 15:04:05 GMT"),
            ("x-fc-invocation-type", "Async"),
        ]);
        let queries = Queries::new()
            .with("tag", vec!["y", "x"])
            .with("enabled", QueryValue::Flag);
        let canonical = CanonicalRequest::new("post", "/a b", &map, Some(&queries));

        assert_eq!(
            canonical.to_string(),
            "POST\nmd5==\ntext/plain\nMon, 02 Jan 2006 15:04:05 GMT\n\
             x-fc-invocation-type:Async\n/a b\nenabled\ntag=x\ntag=y"
        );
    }
}
