// src/core/crypto/symmetric.rs
//! AES-256-CBC transport encryption
//!
//! Wire format is `IV(16) ‖ ciphertext`, base64 encoded. There is no MAC:
//! integrity rests on the PKCS#7 unpad check alone.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::trace;

use crate::consts::{AES_BLOCK_LEN, IV_LEN, MIN_SYM_CIPHERTEXT_LEN};
use crate::core::key::{import_key, SymmetricKeyHandle};
use crate::core::{codec, Result};
use crate::error::CoreError;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Encrypt UTF-8 `plaintext` under `key` with a fresh IV from the OS RNG
pub fn sym_encrypt(key: &SymmetricKeyHandle, plaintext: &str) -> Result<String> {
    sym_encrypt_with(&mut OsRng, key, plaintext)
}

/// Encrypt with the IV drawn from `rng`
pub fn sym_encrypt_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    key: &SymmetricKeyHandle,
    plaintext: &str,
) -> Result<String> {
    let mut iv = [0u8; IV_LEN];
    rng.fill_bytes(&mut iv);

    let cipher = Aes256CbcEnc::new_from_slices(key.material(), &iv)
        .map_err(|e| CoreError::Encryption(e.to_string()))?;
    let body = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let mut wire = Vec::with_capacity(IV_LEN + body.len());
    wire.extend_from_slice(&iv);
    wire.extend_from_slice(&body);
    trace!(len = wire.len(), "AES-CBC encrypted payload");
    Ok(codec::encode(&wire))
}

/// Import the base64 raw key `encoded_key`, then decrypt `ciphertext_b64`
pub fn sym_decrypt(encoded_key: &str, ciphertext_b64: &str) -> Result<String> {
    let key = import_key(encoded_key)?;
    sym_decrypt_with_handle(&key, ciphertext_b64)
}

/// Decrypt `ciphertext_b64` with an already imported key
///
/// Short input, misaligned input, bad padding and non-UTF-8 plaintext all
/// report the same [`CoreError::Decryption`].
pub fn sym_decrypt_with_handle(key: &SymmetricKeyHandle, ciphertext_b64: &str) -> Result<String> {
    let wire = codec::decode(ciphertext_b64)?;
    if wire.len() < MIN_SYM_CIPHERTEXT_LEN || wire.len() % AES_BLOCK_LEN != 0 {
        return Err(CoreError::Decryption);
    }
    let (iv, body) = wire.split_at(IV_LEN);

    let cipher =
        Aes256CbcDec::new_from_slices(key.material(), iv).map_err(|_| CoreError::Decryption)?;
    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(body)
        .map_err(|_| CoreError::Decryption)?;

    String::from_utf8(plaintext).map_err(|_| CoreError::Decryption)
}
