//! Padding and alphabet metadata for base64 strings.

use serde::Serialize;
use tracing::trace;

use crate::constants::PAD;
use crate::validate::{ensure_valid, strip_whitespace};
use crate::{from_url_safe, to_url_safe, Base64Error};

/// Metadata describing a base64 string.
///
/// All fields describe the input after whitespace removal and after padding
/// it with `=` up to a multiple of four characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Base64Info {
    /// Characters before the first `=`.
    pub valid_string: String,
    pub valid_length: usize,
    /// Everything from the first `=` to the end.
    pub padding_string: String,
    pub padding_length: usize,
    /// The padded string is already in URL-safe form.
    pub is_url_safe: bool,
    /// The padded string is already in standard form.
    pub is_normal: bool,
    pub url_safe_string: String,
    pub normal_string: String,
}

impl Base64Info {
    /// Number of bytes this string decodes to.
    pub fn byte_length(&self) -> usize {
        ((self.valid_length + self.padding_length) * 3 / 4).saturating_sub(self.padding_length)
    }
}

/// Returns the number of `=` needed to round `len` up to a multiple of four.
pub(crate) fn padding_needed(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Inspects a base64 string without decoding it.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidInput`] if the input fails
/// [`is_valid_base64`](crate::is_valid_base64).
///
/// # Example
///
/// ```
/// use b64_codec::get_info;
///
/// let info = get_info("TQ==").unwrap();
/// assert_eq!(info.valid_string, "TQ");
/// assert_eq!(info.padding_length, 2);
/// assert_eq!(info.byte_length(), 1);
/// ```
pub fn get_info(input: &str) -> Result<Base64Info, Base64Error> {
    ensure_valid(input)?;
    Ok(inspect(&strip_whitespace(input)))
}

/// Computes metadata for input that already passed validation.
pub(crate) fn inspect(compact: &str) -> Base64Info {
    let mut padded = String::with_capacity(compact.len() + 3);
    padded.push_str(compact);
    padded.extend(std::iter::repeat_n(PAD, padding_needed(compact.len())));

    let valid_length = padded.find(PAD).unwrap_or(padded.len());
    let (valid, padding) = padded.split_at(valid_length);

    let url_safe_string = to_url_safe(&padded);
    let normal_string = from_url_safe(&padded);

    let info = Base64Info {
        valid_string: valid.to_string(),
        valid_length,
        padding_string: padding.to_string(),
        padding_length: padding.len(),
        is_url_safe: padded == url_safe_string,
        is_normal: padded == normal_string,
        url_safe_string,
        normal_string,
    };
    trace!(
        valid_length = info.valid_length,
        padding_length = info.padding_length,
        "inspected base64 input"
    );
    info
}
