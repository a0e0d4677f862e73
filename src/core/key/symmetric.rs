// src/core/key/symmetric.rs
//! AES-256 transport keys, exported as raw bytes in base64

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::Zeroize;

use crate::aliases::AesKey32;
use crate::consts::AES_KEY_LEN;
use crate::core::codec;
use crate::core::Result;
use crate::enums::KeyAlgorithm;
use crate::error::CoreError;

/// AES-256-CBC key material; zeroized on drop
pub struct SymmetricKeyHandle {
    material: AesKey32,
}

impl SymmetricKeyHandle {
    fn from_bytes(mut raw: [u8; AES_KEY_LEN]) -> Self {
        let material = AesKey32::new(raw);
        raw.zeroize();
        Self { material }
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::Aes256Cbc
    }

    pub(crate) fn material(&self) -> &[u8; AES_KEY_LEN] {
        self.material.expose_secret()
    }
}

impl Clone for SymmetricKeyHandle {
    fn clone(&self) -> Self {
        Self::from_bytes(*self.material())
    }
}

impl fmt::Debug for SymmetricKeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKeyHandle")
            .field("algorithm", &self.algorithm())
            .finish_non_exhaustive()
    }
}

/// Generate a new random 256-bit key from the OS RNG
#[inline]
pub fn generate_key() -> SymmetricKeyHandle {
    generate_key_with(&mut OsRng)
}

/// Generate a new random 256-bit key from `rng`
pub fn generate_key_with<R: RngCore + CryptoRng>(rng: &mut R) -> SymmetricKeyHandle {
    let mut raw = [0u8; AES_KEY_LEN];
    rng.fill_bytes(&mut raw);
    trace!("generated AES-256 key");
    SymmetricKeyHandle::from_bytes(raw)
}

/// Export the raw 32 key bytes as base64
pub fn export_key(handle: &SymmetricKeyHandle) -> String {
    codec::encode(handle.material())
}

/// Import base64 raw key bytes; anything but exactly 32 bytes is rejected
pub fn import_key(encoded: &str) -> Result<SymmetricKeyHandle> {
    let mut raw = codec::decode(encoded)
        .map_err(|e| CoreError::KeyImport(format!("symmetric key is not base64: {e}")))?;

    let bytes: [u8; AES_KEY_LEN] = match raw.as_slice().try_into() {
        Ok(bytes) => bytes,
        Err(_) => {
            let len = raw.len();
            raw.zeroize();
            return Err(CoreError::KeyImport(format!(
                "symmetric key must be {AES_KEY_LEN} bytes, got {len}"
            )));
        }
    };
    raw.zeroize();
    Ok(SymmetricKeyHandle::from_bytes(bytes))
}
