//! Standard base64 encoding.

use crate::constants::PAD;
use crate::table::symbol;

/// Encodes a byte slice to a standard base64 string.
///
/// Every full group of three bytes becomes four characters. A trailing
/// group of one or two bytes is padded with `==` or `=` respectively, so
/// the output length is always `ceil(len / 3) * 4`.
///
/// # Example
///
/// ```
/// use b64_codec::bytes_to_base64;
///
/// assert_eq!(bytes_to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);

    let mut triplets = bytes.chunks_exact(3);
    for triplet in &mut triplets {
        let v = (triplet[0] as u32) << 16 | (triplet[1] as u32) << 8 | triplet[2] as u32;
        out.push(symbol(v >> 18));
        out.push(symbol(v >> 12));
        out.push(symbol(v >> 6));
        out.push(symbol(v));
    }

    let rest = triplets.remainder();
    match rest.len() {
        1 => {
            let b = rest[0] as u32;
            out.push(symbol(b >> 2));
            out.push(symbol(b << 4));
            out.push(PAD);
            out.push(PAD);
        }
        2 => {
            let v = (rest[0] as u32) << 8 | rest[1] as u32;
            out.push(symbol(v >> 10));
            out.push(symbol(v >> 4));
            out.push(symbol(v << 2));
            out.push(PAD);
        }
        _ => {}
    }

    out
}

/// Encodes a byte slice, choosing the alphabet family explicitly.
///
/// With `url_safe` set the result is the URL-safe rendering of the standard
/// encoding (see [`to_url_safe`](crate::to_url_safe)).
pub fn encode(bytes: &[u8], url_safe: bool) -> String {
    let encoded = bytes_to_base64(bytes);
    if url_safe {
        crate::to_url_safe(&encoded)
    } else {
        encoded
    }
}
