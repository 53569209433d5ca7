//! Base64 encoding and decoding utilities.
//!
//! This crate provides base64 encoding/decoding with support for:
//! - Standard base64 with padding
//! - URL-safe base64 without padding
//! - Validation and padding metadata for encoded strings
//! - UTF-8 text wrappers
//!
//! # Example
//!
//! ```
//! use b64_codec::{base64_to_bytes, bytes_to_base64};
//!
//! let data = b"hello world";
//! let encoded = bytes_to_base64(data);
//! let decoded = base64_to_bytes(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

pub mod cli;
mod constants;
mod from_base64;
mod info;
mod string;
mod table;
mod to_base64;
mod to_base64_url;
mod validate;

pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, PAD};
pub use from_base64::{base64_to_bytes, decode};
pub use info::{get_info, Base64Info};
pub use string::{decode_to_string, encode_to_string};
pub use to_base64::{bytes_to_base64, encode};
pub use to_base64_url::{bytes_to_base64_url, from_url_safe, to_url_safe};
pub use validate::{is_valid_base64, is_valid_base64_value};

use std::string::FromUtf8Error;
use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input contains characters outside the base64 alphabets.
    #[error("INVALID_BASE64_STRING")]
    InvalidInput,
    /// The decoded bytes are not valid UTF-8.
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),
}
