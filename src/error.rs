// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::enums::KeyRole;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("malformed base64: {0}")]
    Format(#[from] base64::DecodeError),

    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("key import failed: {0}")]
    KeyImport(String),

    #[error("key export failed: {0}")]
    KeyExport(String),

    #[error("{expected} key required, got a {actual} key")]
    KeyRole { expected: KeyRole, actual: KeyRole },

    #[error("plaintext is {len} bytes, OAEP capacity is {max} bytes")]
    OversizedPlaintext { len: usize, max: usize },

    #[error("encryption failed: {0}")]
    Encryption(String),

    // One message for every failure mode so callers cannot tell wrong key from tampering
    #[error("decryption failed")]
    Decryption,

    #[error("node {0} is already registered")]
    NodeAlreadyRegistered(u32),

    #[error("no port for id {0} under the configured base")]
    PortOutOfRange(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
