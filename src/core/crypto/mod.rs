// src/core/crypto/mod.rs
//! Pure cryptographic operations: no I/O, no shared state
//!
//! All functions work on key handles and base64 text. Randomness comes from
//! the OS RNG unless a caller passes its own through the `_with` variants.
mod asymmetric;
mod symmetric;

pub use asymmetric::{
    oaep_capacity, rsa_decrypt, rsa_encrypt, rsa_encrypt_with, rsa_encrypt_with_handle,
};
pub use symmetric::{sym_decrypt, sym_decrypt_with_handle, sym_encrypt, sym_encrypt_with};
