use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UriError {
    #[error("URI malformed")]
    Malformed,
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

fn hex_val(b: u8) -> Result<u8, UriError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(UriError::Malformed),
    }
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
///
/// Non-ASCII characters are encoded as their UTF-8 bytes.
///
/// # Examples
///
/// ```
/// use handy_util::url::encode_uri_component;
///
/// assert_eq!(encode_uri_component("home/more"), "home%2Fmore");
/// assert_eq!(encode_uri_component("a b&c"), "a%20b%26c");
/// assert_eq!(encode_uri_component("中"), "%E4%B8%AD");
/// ```
pub fn encode_uri_component(s: &str) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            let _ = write!(out, "%{:02X}", b);
        }
    }
    out
}

/// Decode `%XX` escapes, requiring the decoded bytes to form valid UTF-8.
///
/// `+` is left alone.
///
/// # Errors
///
/// [`UriError::Malformed`] on a truncated or non-hex escape, or when the
/// escapes decode to invalid UTF-8.
///
/// # Examples
///
/// ```
/// use handy_util::url::decode_uri_component;
///
/// assert_eq!(decode_uri_component("home%2Fmore").unwrap(), "home/more");
/// assert!(decode_uri_component("%E4%B8").is_err());
/// ```
pub fn decode_uri_component(s: &str) -> Result<String, UriError> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len() {
                return Err(UriError::Malformed);
            }
            let hi = hex_val(bytes[i + 1])?;
            let lo = hex_val(bytes[i + 2])?;
            out.push((hi << 4) | lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| UriError::Malformed)
}
