//! Character-set validation for base64 input.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::Base64Error;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static TRAILING_PADDING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"={0,2}$").unwrap());

/// Anything outside the union of the standard and URL-safe alphabets.
static NOT_ALPHABET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9A-Za-z+/\-_]").unwrap());

/// Checks whether a string looks like base64.
///
/// Whitespace anywhere and up to two trailing `=` are ignored. The rest must
/// consist of standard or URL-safe characters. The check is permissive:
/// `+`/`/` and `-`/`_` may appear together in one string.
///
/// # Example
///
/// ```
/// use b64_codec::is_valid_base64;
///
/// assert!(is_valid_base64(""));
/// assert!(is_valid_base64("aGVsbG8="));
/// assert!(is_valid_base64("aGVs\nbG8"));
/// assert!(!is_valid_base64("not base64!!"));
/// ```
pub fn is_valid_base64(input: &str) -> bool {
    let compact = strip_whitespace(input);
    let body = TRAILING_PADDING.replace(&compact, "");
    !NOT_ALPHABET.is_match(&body)
}

/// Same as [`is_valid_base64`] for dynamically typed input.
///
/// Anything other than a JSON string is rejected.
///
/// # Example
///
/// ```
/// use b64_codec::is_valid_base64_value;
/// use serde_json::json;
///
/// assert!(is_valid_base64_value(&json!("TWFu")));
/// assert!(!is_valid_base64_value(&json!(12345)));
/// ```
pub fn is_valid_base64_value(value: &Value) -> bool {
    match value {
        Value::String(s) => is_valid_base64(s),
        _ => false,
    }
}

pub(crate) fn ensure_valid(input: &str) -> Result<(), Base64Error> {
    if is_valid_base64(input) {
        Ok(())
    } else {
        debug!(len = input.len(), "rejected invalid base64 input");
        Err(Base64Error::InvalidInput)
    }
}

pub(crate) fn strip_whitespace(input: &str) -> Cow<'_, str> {
    WHITESPACE.replace_all(input, "")
}
