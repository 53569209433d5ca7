//! Tests for the UTF-8 text wrappers.

use b64_codec::{decode_to_string, encode_to_string, Base64Error};

#[test]
fn hello() {
    assert_eq!(encode_to_string("hello", false), "aGVsbG8=");
    assert_eq!(decode_to_string("aGVsbG8=", false).unwrap(), "hello");
}

#[test]
fn hello_url_safe() {
    assert_eq!(encode_to_string("hello", true), "aGVsbG8");
    assert_eq!(decode_to_string("aGVsbG8", true).unwrap(), "hello");
}

#[test]
fn multibyte_text() {
    let text = "héllo wörld ✓ 日本語";
    assert_eq!(decode_to_string(&encode_to_string(text, false), false).unwrap(), text);
    assert_eq!(decode_to_string(&encode_to_string(text, true), true).unwrap(), text);
}

#[test]
fn empty_text() {
    assert_eq!(encode_to_string("", false), "");
    assert_eq!(decode_to_string("", false).unwrap(), "");
}

#[test]
fn malformed_base64() {
    assert_eq!(decode_to_string("not base64!!", false), Err(Base64Error::InvalidInput));
}

#[test]
fn malformed_utf8() {
    // "/w==" decodes to the lone byte 0xff.
    let err = decode_to_string("/w==", false).unwrap_err();
    match err {
        Base64Error::Utf8(e) => assert_eq!(e.as_bytes(), [0xff]),
        other => panic!("unexpected error: {other:?}"),
    }
}
