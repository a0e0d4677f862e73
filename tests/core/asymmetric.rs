// tests/core/asymmetric.rs
use onion_relay_crypto::consts::RSA_OAEP_MAX_PLAINTEXT;
use onion_relay_crypto::core::{
    decode, encode, export_private, export_public, import_private, oaep_capacity, rsa_decrypt,
    rsa_encrypt, rsa_encrypt_with_handle,
};
use onion_relay_crypto::error::CoreError;
use onion_relay_crypto::{AsymmetricKeyHandle, KeyRole};
use rand::rngs::OsRng;
use rsa::Pkcs1v15Encrypt;

use crate::common::{key_pair, other_key_pair};

fn public_text() -> String {
    export_public(&key_pair().public_key).unwrap()
}

#[test]
fn test_oaep_capacity_at_2048_bits() {
    assert_eq!(oaep_capacity(256), 190);
    assert_eq!(RSA_OAEP_MAX_PLAINTEXT, 190);
    assert_eq!(oaep_capacity(10), 0);
}

#[test]
fn test_roundtrip_up_to_capacity() {
    let public = public_text();
    for len in [0usize, 1, 11, 100, 190] {
        let plaintext: Vec<u8> = (0..len).map(|i| (i * 7) as u8).collect();
        let ciphertext = rsa_encrypt(&encode(&plaintext), &public).unwrap();
        assert_eq!(decode(&ciphertext).unwrap().len(), 256);

        let recovered = rsa_decrypt(&ciphertext, &key_pair().private_key).unwrap();
        assert_eq!(decode(&recovered).unwrap(), plaintext, "length {len}");
    }
}

#[test]
fn test_oversized_plaintext_is_rejected() {
    let plaintext = vec![0x41u8; 191];
    let err = rsa_encrypt(&encode(&plaintext), &public_text()).unwrap_err();
    assert!(matches!(
        err,
        CoreError::OversizedPlaintext { len: 191, max: 190 }
    ));
}

#[test]
fn test_encryption_is_randomized() {
    let public = public_text();
    let message = encode(b"same input");
    let first = rsa_encrypt(&message, &public).unwrap();
    let second = rsa_encrypt(&message, &public).unwrap();
    assert_ne!(first, second);
    assert_eq!(rsa_decrypt(&first, &key_pair().private_key).unwrap(), message);
    assert_eq!(rsa_decrypt(&second, &key_pair().private_key).unwrap(), message);
}

#[test]
fn test_decrypt_with_wrong_key_fails() {
    let ciphertext = rsa_encrypt(&encode(b"for node 1 only"), &public_text()).unwrap();
    let err = rsa_decrypt(&ciphertext, &other_key_pair().private_key).unwrap_err();
    assert!(matches!(err, CoreError::Decryption));
}

#[test]
fn test_decrypt_corrupted_ciphertext_fails_uniformly() {
    let ciphertext = rsa_encrypt(&encode(b"integrity"), &public_text()).unwrap();
    let mut bytes = decode(&ciphertext).unwrap();
    bytes[100] ^= 0x01;
    let corrupted = rsa_decrypt(&encode(&bytes), &key_pair().private_key).unwrap_err();

    let wrong_key = rsa_decrypt(&ciphertext, &other_key_pair().private_key).unwrap_err();

    assert!(matches!(corrupted, CoreError::Decryption));
    assert_eq!(corrupted.to_string(), wrong_key.to_string());
}

#[test]
fn test_decrypt_truncated_ciphertext_fails() {
    let ciphertext = rsa_encrypt(&encode(b"short"), &public_text()).unwrap();
    let bytes = decode(&ciphertext).unwrap();
    let err = rsa_decrypt(&encode(&bytes[..128]), &key_pair().private_key).unwrap_err();
    assert!(matches!(err, CoreError::Decryption));
}

#[test]
fn test_handles_refuse_the_wrong_direction() {
    let pair = key_pair();
    assert!(matches!(
        rsa_encrypt_with_handle(&encode(b"x"), &pair.private_key),
        Err(CoreError::KeyRole {
            expected: KeyRole::Public,
            actual: KeyRole::Private
        })
    ));

    let ciphertext = rsa_encrypt(&encode(b"x"), &public_text()).unwrap();
    assert!(matches!(
        rsa_decrypt(&ciphertext, &pair.public_key),
        Err(CoreError::KeyRole {
            expected: KeyRole::Private,
            actual: KeyRole::Public
        })
    ));
}

#[test]
fn test_encrypt_with_private_key_text_fails_import() {
    let private = export_private(Some(&key_pair().private_key))
        .unwrap()
        .unwrap();
    assert!(matches!(
        rsa_encrypt(&encode(b"x"), &private),
        Err(CoreError::KeyImport(_))
    ));
}

#[test]
fn test_malformed_base64_payloads() {
    assert!(matches!(
        rsa_encrypt("***", &public_text()),
        Err(CoreError::Format(_))
    ));
    assert!(matches!(
        rsa_decrypt("***", &key_pair().private_key),
        Err(CoreError::Format(_))
    ));
}

#[test]
fn test_reimported_private_key_decrypts() {
    let exported = export_private(Some(&key_pair().private_key))
        .unwrap()
        .unwrap();
    let reimported = import_private(&exported).unwrap();

    let ciphertext = rsa_encrypt(&encode(b"layer"), &public_text()).unwrap();
    let recovered = rsa_decrypt(&ciphertext, &reimported).unwrap();
    assert_eq!(decode(&recovered).unwrap(), b"layer");
}

#[test]
fn test_decrypt_rejects_pkcs1v15_padding() {
    let AsymmetricKeyHandle::Public(public) = &key_pair().public_key else {
        panic!("expected a public handle");
    };
    let ciphertext = public.encrypt(&mut OsRng, Pkcs1v15Encrypt, b"hello").unwrap();

    let err = rsa_decrypt(&encode(&ciphertext), &key_pair().private_key).unwrap_err();
    assert!(matches!(err, CoreError::Decryption));
}
