//! Percent-decoding of request paths prior to signing.
//!
//! Paths are signed in their decoded form. Besides standard `%XX` escapes the
//! server also accepts the legacy `%uXXXX` form, which carries a UTF-16 code
//! unit and is re-encoded here as UTF-8.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::AuthError;

/// Characters kept verbatim when escaping a path for the wire.
///
/// Unreserved characters (A-Z, a-z, 0-9, `-`, `_`, `.`, `~`) and `/` pass
/// through; everything else is percent-encoded.
const PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Decode `%XX` and `%uXXXX` escapes into raw bytes.
///
/// Truncated or malformed escapes are copied literally; lookahead never
/// reads past the end of the input.
///
/// # Examples
///
/// ```
/// use fcstack_auth::unescape_bytes;
///
/// assert_eq!(unescape_bytes("/a%20b"), b"/a b");
/// assert_eq!(unescape_bytes("%u4E2D"), "中".as_bytes());
/// assert_eq!(unescape_bytes("100%"), b"100%");
/// ```
#[must_use]
pub fn unescape_bytes(input: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut rest = input.as_bytes();

    while let [byte, tail @ ..] = rest {
        if let Some((code, tail)) = unicode_escape(rest) {
            push_code_point(&mut out, code);
            rest = tail;
        } else if let Some((decoded, tail)) = byte_escape(rest) {
            out.push(decoded);
            rest = tail;
        } else {
            out.push(*byte);
            rest = tail;
        }
    }

    out
}

/// Decode a path with [`unescape_bytes`] and require the result to be UTF-8.
///
/// # Errors
///
/// Returns [`AuthError::InvalidPathEncoding`] when the decoded bytes are not
/// valid UTF-8 (for example a lone `%FF`).
pub fn unescape(input: &str) -> Result<String, AuthError> {
    String::from_utf8(unescape_bytes(input))
        .map_err(|_| AuthError::InvalidPathEncoding(input.to_owned()))
}

/// Percent-encode a raw path for the wire, keeping `/` separators.
///
/// ```
/// use fcstack_auth::{escape_path, unescape};
///
/// let wire = escape_path("/action with space");
/// assert_eq!(wire, "/action%20with%20space");
/// assert_eq!(unescape(&wire).unwrap(), "/action with space");
/// ```
#[must_use]
pub fn escape_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_ENCODE_SET).to_string()
}

/// `%uXXXX` at the start of `input`.
fn unicode_escape(input: &[u8]) -> Option<(u32, &[u8])> {
    let [b'%', b'u', a, b, c, d, tail @ ..] = input else {
        return None;
    };
    Some((hex_number(&[*a, *b, *c, *d])?, tail))
}

/// `%XX` at the start of `input`.
fn byte_escape(input: &[u8]) -> Option<(u8, &[u8])> {
    let [b'%', hi, lo, tail @ ..] = input else {
        return None;
    };
    let byte = u8::try_from(hex_number(&[*hi, *lo])?).ok()?;
    Some((byte, tail))
}

fn hex_number(digits: &[u8]) -> Option<u32> {
    digits
        .iter()
        .try_fold(0_u32, |acc, digit| Some((acc << 4) | char::from(*digit).to_digit(16)?))
}

#[allow(clippy::cast_possible_truncation)]
fn push_code_point(out: &mut Vec<u8>, code: u32) {
    if code < 0x80 {
        out.push(code as u8);
    } else if code < 0x800 {
        out.push((0xC0 | (code >> 6)) as u8);
        out.push((0x80 | (code & 0x3F)) as u8);
    } else {
        out.push((0xE0 | (code >> 12)) as u8);
        out.push((0x80 | ((code >> 6) & 0x3F)) as u8);
        out.push((0x80 | (code & 0x3F)) as u8);
    }
}
