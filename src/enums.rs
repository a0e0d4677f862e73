// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Key roles and algorithms carried by every key handle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which half of an asymmetric pair a handle holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyRole {
    /// Encrypt-only
    Public,
    /// Decrypt-only
    Private,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Public => f.write_str("public"),
            KeyRole::Private => f.write_str("private"),
        }
    }
}

/// Supported key algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum KeyAlgorithm {
    /// RSA with OAEP padding, SHA-256 for both the label hash and MGF1
    RsaOaepSha256,
    /// AES-256 in CBC mode with PKCS#7 padding
    Aes256Cbc,
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::RsaOaepSha256 => f.write_str("RSA-OAEP/SHA-256"),
            KeyAlgorithm::Aes256Cbc => f.write_str("AES-256-CBC"),
        }
    }
}
