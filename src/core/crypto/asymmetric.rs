// src/core/crypto/asymmetric.rs
//! RSA-OAEP (SHA-256) over base64 payloads
//!
//! One OAEP block per call. Plaintext is capped by the padding overhead,
//! there is no chunking.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rsa::Oaep;
use sha2::Sha256;
use tracing::trace;

use crate::consts::SHA256_LEN;
use crate::core::key::{import_public, AsymmetricKeyHandle};
use crate::core::{codec, Result};
use crate::error::CoreError;

/// Largest plaintext OAEP/SHA-256 accepts for a modulus of `modulus_bytes`
#[inline]
pub fn oaep_capacity(modulus_bytes: usize) -> usize {
    modulus_bytes.saturating_sub(2 * SHA256_LEN + 2)
}

/// Encrypt base64 `plaintext_b64` for the base64 SPKI `public_key_encoded`
pub fn rsa_encrypt(plaintext_b64: &str, public_key_encoded: &str) -> Result<String> {
    let public_key = import_public(public_key_encoded)?;
    rsa_encrypt_with(&mut OsRng, plaintext_b64, &public_key)
}

/// Encrypt base64 `plaintext_b64` with an already imported public handle
pub fn rsa_encrypt_with_handle(
    plaintext_b64: &str,
    public_key: &AsymmetricKeyHandle,
) -> Result<String> {
    rsa_encrypt_with(&mut OsRng, plaintext_b64, public_key)
}

/// Encrypt with padding randomness drawn from `rng`
pub fn rsa_encrypt_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    plaintext_b64: &str,
    public_key: &AsymmetricKeyHandle,
) -> Result<String> {
    let key = public_key.as_public()?;
    let plaintext = codec::decode(plaintext_b64)?;

    let max = oaep_capacity(public_key.modulus_bytes());
    if plaintext.len() > max {
        return Err(CoreError::OversizedPlaintext {
            len: plaintext.len(),
            max,
        });
    }

    let ciphertext = key
        .encrypt(rng, Oaep::new::<Sha256>(), &plaintext)
        .map_err(|e| CoreError::Encryption(e.to_string()))?;
    trace!(len = plaintext.len(), "RSA-OAEP encrypted payload");
    Ok(codec::encode(&ciphertext))
}

/// Decrypt base64 `ciphertext_b64` with a private handle, returning base64
///
/// Wrong key, corrupted bytes and bad padding all collapse into
/// [`CoreError::Decryption`]. The private operation is blinded.
pub fn rsa_decrypt(ciphertext_b64: &str, private_key: &AsymmetricKeyHandle) -> Result<String> {
    let key = private_key.as_private()?;
    let ciphertext = codec::decode(ciphertext_b64)?;

    let plaintext = key
        .decrypt_blinded(&mut OsRng, Oaep::new::<Sha256>(), &ciphertext)
        .map_err(|_| CoreError::Decryption)?;
    Ok(codec::encode(&plaintext))
}
