//! Forward and reverse alphabet lookup tables.

use crate::constants::ALPHABET_BYTES;

/// Reverse-table marker for bytes outside both alphabets.
const INVALID: u8 = 0xff;

/// Symbol value (0..64) to character.
static FORWARD: [u8; 64] = *ALPHABET_BYTES;

/// Character to symbol value.
///
/// Covers the 64 standard characters plus the URL-safe aliases `-` and `_`,
/// which resolve to the same slots as `+` and `/`. The forward table is left
/// untouched by the aliases.
static REVERSE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table[b'-' as usize] = 62;
    table[b'_' as usize] = 63;
    table
};

/// Maps the low six bits of `value` to a standard alphabet character.
#[inline]
pub(crate) fn symbol(value: u32) -> char {
    FORWARD[(value & 0x3f) as usize] as char
}

/// Maps an alphabet character (standard or URL-safe) back to its 6-bit value.
#[inline]
pub(crate) fn sextet(c: u8) -> Option<u32> {
    match REVERSE[c as usize] {
        INVALID => None,
        value => Some(value as u32),
    }
}
