// src/lib.rs
//! onion-relay-crypto: hybrid encryption for an onion-routing prototype
//!
//! Features:
//! - RSA-OAEP (2048-bit, SHA-256) key pairs exported as SPKI / PKCS#8 base64
//! - AES-256-CBC transport encryption with a fresh IV per message
//! - Injectable randomness for deterministic tests
//! - Node registry, relay identity and user endpoint collaborators

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod registry;
pub mod relay;
pub mod user;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crate::core::{
    decode, encode, export_key, export_private, export_public, generate_key, generate_key_pair,
    import_key, import_private, import_public, rsa_decrypt, rsa_encrypt, sym_decrypt, sym_encrypt,
    AsymmetricKeyHandle, KeyPair, Result as CoreResult, SymmetricKeyHandle,
};
pub use enums::{KeyAlgorithm, KeyRole};
pub use error::CoreError;
pub use registry::{GetNodeRegistryBody, NodeRecord, NodeRegistry, RegisterNodeBody};
pub use relay::{RelayCache, RelayNode};
pub use user::{MessageBody, OutgoingMessage, SendMessageBody, UserNode};
