//! UTF-8 text convenience wrappers.

use crate::Base64Error;

/// Encodes the UTF-8 bytes of `text`.
///
/// # Example
///
/// ```
/// use b64_codec::encode_to_string;
///
/// assert_eq!(encode_to_string("hello", false), "aGVsbG8=");
/// assert_eq!(encode_to_string("hello", true), "aGVsbG8");
/// ```
pub fn encode_to_string(text: &str, url_safe: bool) -> String {
    crate::encode(text.as_bytes(), url_safe)
}

/// Decodes base64 and interprets the bytes as UTF-8 text.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidInput`] for invalid base64, or
/// [`Base64Error::Utf8`] carrying the original UTF-8 error when the decoded
/// bytes are not valid UTF-8.
///
/// # Example
///
/// ```
/// use b64_codec::decode_to_string;
///
/// assert_eq!(decode_to_string("aGVsbG8=", false).unwrap(), "hello");
/// ```
pub fn decode_to_string(input: &str, url_safe: bool) -> Result<String, Base64Error> {
    let bytes = crate::decode(input, url_safe)?;
    Ok(String::from_utf8(bytes)?)
}
