// src/core/key/mod.rs
//! Key lifecycle: generation, export and import for both key families
//!
//! Every exported key is base64 text; every import restores a handle whose
//! role and algorithm are fixed by its type.
mod asymmetric;
mod symmetric;

pub use asymmetric::{
    export_private, export_public, fingerprint, generate_key_pair, generate_key_pair_with,
    import_private, import_public, AsymmetricKeyHandle, KeyPair,
};
pub use symmetric::{export_key, generate_key, generate_key_with, import_key, SymmetricKeyHandle};
