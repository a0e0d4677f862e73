// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! Symmetric key material never lives in a bare array outside these wrappers.

pub use secure_gate::fixed_alias;

// Fixed-size secrets
fixed_alias!(AesKey32, 32); // 256-bit AES-CBC transport key
