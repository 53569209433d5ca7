//! Base64 decoding.

use std::borrow::Cow;

use tracing::trace;

use crate::info::{inspect, Base64Info};
use crate::table::sextet;
use crate::validate::{ensure_valid, strip_whitespace};
use crate::{from_url_safe, Base64Error};

/// Decodes a base64 string to bytes.
///
/// Both alphabets are understood: `-` and `_` decode like `+` and `/`, and
/// missing padding is tolerated. With `url_safe` set the input is first
/// rewritten to its standard padded form.
///
/// The output length always follows `(valid + padding) * 3 / 4 - padding`.
/// Stray padding after a complete group therefore drops trailing bytes:
/// `"AAAA=="` decodes to two zero bytes, not three.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidInput`] if the input fails
/// [`is_valid_base64`](crate::is_valid_base64).
///
/// # Example
///
/// ```
/// use b64_codec::decode;
///
/// assert_eq!(decode("aGVsbG8=", false).unwrap(), b"hello");
/// assert_eq!(decode("aGVsbG8", true).unwrap(), b"hello");
/// ```
pub fn decode(input: &str, url_safe: bool) -> Result<Vec<u8>, Base64Error> {
    ensure_valid(input)?;
    let compact = strip_whitespace(input);
    let source = if url_safe {
        Cow::Owned(from_url_safe(&compact))
    } else {
        compact
    };
    let info = inspect(&source);
    let buf = unpack(&info)?;
    trace!(input_len = input.len(), byte_len = buf.len(), url_safe, "decoded base64");
    Ok(buf)
}

/// Decodes a standard (or alias-tolerant) base64 string to bytes.
///
/// # Example
///
/// ```
/// use b64_codec::base64_to_bytes;
///
/// assert_eq!(base64_to_bytes("TWFu").unwrap(), b"Man");
/// assert_eq!(base64_to_bytes("TQ==").unwrap(), [0x4d]);
/// ```
pub fn base64_to_bytes(input: &str) -> Result<Vec<u8>, Base64Error> {
    decode(input, false)
}

fn lookup(c: u8) -> Result<u32, Base64Error> {
    sextet(c).ok_or(Base64Error::InvalidInput)
}

fn unpack(info: &Base64Info) -> Result<Vec<u8>, Base64Error> {
    let length = info.byte_length();
    let mut buf = Vec::with_capacity(length + 2);

    let mut groups = info.valid_string.as_bytes().chunks_exact(4);
    for group in &mut groups {
        let v = lookup(group[0])? << 18
            | lookup(group[1])? << 12
            | lookup(group[2])? << 6
            | lookup(group[3])?;
        buf.push((v >> 16) as u8);
        buf.push((v >> 8) as u8);
        buf.push(v as u8);
    }

    // The tail length mirrors the padding: two characters carry one byte,
    // three carry two, a lone character carries none.
    let tail = groups.remainder();
    match tail.len() {
        2 => {
            let v = lookup(tail[0])? << 2 | lookup(tail[1])? >> 4;
            buf.push(v as u8);
        }
        3 => {
            let v = lookup(tail[0])? << 10 | lookup(tail[1])? << 4 | lookup(tail[2])? >> 2;
            buf.push((v >> 8) as u8);
            buf.push(v as u8);
        }
        _ => {}
    }

    // Excess padding after a full group shortens the output.
    buf.truncate(length);
    Ok(buf)
}
