// src/core/mod.rs
pub mod codec;
pub mod crypto;
pub mod key;

pub use codec::*;
pub use crypto::*;
pub use key::*;

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
