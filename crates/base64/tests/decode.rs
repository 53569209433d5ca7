//! Tests for base64 decoding (base64_to_bytes).

use b64_codec::{base64_to_bytes, bytes_to_base64, decode, Base64Error};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = bytes_to_base64(&blob);
        assert_eq!(base64_to_bytes(&encoded).unwrap(), blob);
        assert_eq!(decode(&encoded, false).unwrap(), blob);
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = bytes_to_base64(&blob);
        let invalid = format!("{}!!!!", encoded);
        let result = base64_to_bytes(&invalid);
        assert!(matches!(result, Err(Base64Error::InvalidInput)));
    }
}

#[test]
fn decodes_without_padding() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = bytes_to_base64(&blob);
        let unpadded = encoded.trim_end_matches('=');
        assert_eq!(base64_to_bytes(unpadded).unwrap(), blob);
    }
}

#[test]
fn decodes_wrapped_lines() {
    let blob: Vec<u8> = (0..=255).collect();
    let encoded = bytes_to_base64(&blob);
    let wrapped = encoded
        .as_bytes()
        .chunks(76)
        .map(|line| std::str::from_utf8(line).unwrap())
        .collect::<Vec<_>>()
        .join("\r\n");
    assert_eq!(base64_to_bytes(&wrapped).unwrap(), blob);
}

#[test]
fn empty_input() {
    assert_eq!(base64_to_bytes("").unwrap(), b"");
}

#[test]
fn single_byte() {
    assert_eq!(base64_to_bytes("Zg==").unwrap(), b"f");
    assert_eq!(base64_to_bytes("TQ==").unwrap(), [0x4d]);
}

#[test]
fn two_bytes() {
    assert_eq!(base64_to_bytes("Zm8=").unwrap(), b"fo");
}

#[test]
fn three_bytes() {
    assert_eq!(base64_to_bytes("Zm9v").unwrap(), b"foo");
    assert_eq!(base64_to_bytes("TWFu").unwrap(), b"Man");
}

#[test]
fn hello_world() {
    assert_eq!(base64_to_bytes("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
}

#[test]
fn rejects_misplaced_padding() {
    assert_eq!(base64_to_bytes("TQ===").unwrap_err(), Base64Error::InvalidInput);
    assert_eq!(base64_to_bytes("TQ==TQ==").unwrap_err(), Base64Error::InvalidInput);
}

#[test]
fn decodes_mixed_alphabets() {
    assert_eq!(base64_to_bytes("-/8=").unwrap(), [0xfb, 0xff]);
    assert_eq!(base64_to_bytes("a+b_").unwrap(), base64_to_bytes("a+b/").unwrap());
}
