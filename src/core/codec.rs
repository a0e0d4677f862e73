// src/core/codec.rs
//! Base64 transport encoding for keys and ciphertexts
//!
//! Standard alphabet with padding. This is the only form key material or
//! ciphertext takes when it leaves the process.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::Result;

/// Encode raw bytes as padded standard base64
#[inline]
pub fn encode(raw: &[u8]) -> String {
    STANDARD.encode(raw)
}

/// Decode padded standard base64; exact inverse of [`encode`]
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}
