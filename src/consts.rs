// src/consts.rs
//! Shared constants: algorithm parameters and wire-format sizes

/// Modulus size for freshly generated RSA-OAEP keys
pub const RSA_MODULUS_BITS: usize = 2048;

/// Smallest modulus accepted on import
pub const RSA_MIN_MODULUS_BITS: usize = 2048;

/// Public exponent for freshly generated RSA-OAEP keys (F4)
pub const RSA_PUBLIC_EXPONENT: u32 = 65_537;

/// SHA-256 digest length, used by OAEP on both sides of the padding
pub const SHA256_LEN: usize = 32;

/// OAEP plaintext ceiling at 2048 bits: 256 − 2·32 − 2
pub const RSA_OAEP_MAX_PLAINTEXT: usize = RSA_MODULUS_BITS / 8 - 2 * SHA256_LEN - 2;

/// AES-256 key length in bytes
pub const AES_KEY_LEN: usize = 32;

/// AES block size, which is also the CBC IV length
pub const AES_BLOCK_LEN: usize = 16;

/// IV length prefixed to every symmetric ciphertext
pub const IV_LEN: usize = AES_BLOCK_LEN;

/// Smallest valid symmetric ciphertext: one IV plus one padded block
pub const MIN_SYM_CIPHERTEXT_LEN: usize = IV_LEN + AES_BLOCK_LEN;

/// Config file consulted when `ONION_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "onion-config.toml";

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "ONION_CONFIG";
