//! URL-safe base64 renderings.

use crate::constants::PAD;
use crate::info::padding_needed;

/// Encodes a byte slice to a URL-safe base64 string without padding.
///
/// # Example
///
/// ```
/// use b64_codec::bytes_to_base64_url;
///
/// assert_eq!(bytes_to_base64_url(b"hello world"), "aGVsbG8gd29ybGQ");
/// ```
pub fn bytes_to_base64_url(bytes: &[u8]) -> String {
    crate::encode(bytes, true)
}

/// Converts a standard base64 string to its URL-safe form.
///
/// Trailing `=` are dropped, `+` becomes `-` and `/` becomes `_`. Other
/// characters pass through unchanged.
///
/// # Example
///
/// ```
/// use b64_codec::to_url_safe;
///
/// assert_eq!(to_url_safe("+/8="), "-_8");
/// ```
pub fn to_url_safe(encoded: &str) -> String {
    encoded
        .trim_end_matches(PAD)
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect()
}

/// Converts a URL-safe base64 string to its standard, padded form.
///
/// Pads to a multiple of four with `=` and maps `-` to `+` and `_` to `/`.
///
/// # Example
///
/// ```
/// use b64_codec::from_url_safe;
///
/// assert_eq!(from_url_safe("-_8"), "+/8=");
/// ```
pub fn from_url_safe(encoded: &str) -> String {
    let padding = padding_needed(encoded.len());
    let mut out = String::with_capacity(encoded.len() + padding);
    out.extend(encoded.chars().map(|c| match c {
        '-' => '+',
        '_' => '/',
        c => c,
    }));
    out.extend(std::iter::repeat_n(PAD, padding));
    out
}
