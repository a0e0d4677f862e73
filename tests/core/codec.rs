// tests/core/codec.rs
use onion_relay_crypto::core::{decode, encode};
use onion_relay_crypto::error::CoreError;
use proptest::prelude::*;

#[test]
fn test_encode_known_vector() {
    assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
    assert_eq!(decode("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
}

#[test]
fn test_empty_buffer_roundtrips() {
    assert_eq!(encode(b""), "");
    assert!(decode("").unwrap().is_empty());
}

#[test]
fn test_non_utf8_bytes_roundtrip() {
    let raw = [0xff, 0xfe, 0x00, 0x80, 0xc3, 0x28];
    assert_eq!(decode(&encode(&raw)).unwrap(), raw);
}

#[test]
fn test_decode_rejects_wrong_alphabet() {
    let err = decode("not*base64!").unwrap_err();
    assert!(matches!(err, CoreError::Format(_)));
}

#[test]
fn test_decode_rejects_impossible_length() {
    // 5 symbols can never be a whole number of bytes
    assert!(matches!(decode("QUJDR"), Err(CoreError::Format(_))));
}

#[test]
fn test_decode_rejects_url_safe_alphabet() {
    // 0xfb 0xff encodes to "-_8" in the URL-safe alphabet
    assert!(matches!(decode("-_8="), Err(CoreError::Format(_))));
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }
}
