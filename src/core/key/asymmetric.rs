// src/core/key/asymmetric.rs
//! RSA-OAEP key pairs: generation, SPKI / PKCS#8 export and import

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::consts::{RSA_MIN_MODULUS_BITS, RSA_MODULUS_BITS, RSA_PUBLIC_EXPONENT};
use crate::core::codec;
use crate::core::Result;
use crate::enums::{KeyAlgorithm, KeyRole};
use crate::error::CoreError;

/// Role-tagged RSA-OAEP key material
///
/// The variant decides what the handle may do: `Public` only encrypts,
/// `Private` only decrypts.
#[derive(Clone, PartialEq, Eq)]
pub enum AsymmetricKeyHandle {
    Public(RsaPublicKey),
    Private(RsaPrivateKey),
}

impl AsymmetricKeyHandle {
    pub fn role(&self) -> KeyRole {
        match self {
            Self::Public(_) => KeyRole::Public,
            Self::Private(_) => KeyRole::Private,
        }
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::RsaOaepSha256
    }

    /// Modulus length in bytes, which is also the ciphertext length
    pub fn modulus_bytes(&self) -> usize {
        match self {
            Self::Public(key) => key.size(),
            Self::Private(key) => key.size(),
        }
    }

    pub(crate) fn as_public(&self) -> Result<&RsaPublicKey> {
        match self {
            Self::Public(key) => Ok(key),
            Self::Private(_) => Err(CoreError::KeyRole {
                expected: KeyRole::Public,
                actual: KeyRole::Private,
            }),
        }
    }

    pub(crate) fn as_private(&self) -> Result<&RsaPrivateKey> {
        match self {
            Self::Private(key) => Ok(key),
            Self::Public(_) => Err(CoreError::KeyRole {
                expected: KeyRole::Private,
                actual: KeyRole::Public,
            }),
        }
    }
}

impl fmt::Debug for AsymmetricKeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsymmetricKeyHandle")
            .field("role", &self.role())
            .field("algorithm", &self.algorithm())
            .field("modulus_bits", &(self.modulus_bytes() * 8))
            .finish_non_exhaustive()
    }
}

/// A matched public/private pair; each half is exported independently
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public_key: AsymmetricKeyHandle,
    pub private_key: AsymmetricKeyHandle,
}

/// Generate a fresh 2048-bit RSA-OAEP key pair from the OS RNG
pub fn generate_key_pair() -> Result<KeyPair> {
    generate_key_pair_with(&mut OsRng)
}

/// Generate a fresh 2048-bit RSA-OAEP key pair from `rng`
pub fn generate_key_pair_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<KeyPair> {
    let exponent = BigUint::from(u64::from(RSA_PUBLIC_EXPONENT));
    let private = RsaPrivateKey::new_with_exp(rng, RSA_MODULUS_BITS, &exponent)
        .map_err(|e| CoreError::KeyGeneration(e.to_string()))?;
    let public = RsaPublicKey::from(&private);

    let pair = KeyPair {
        public_key: AsymmetricKeyHandle::Public(public),
        private_key: AsymmetricKeyHandle::Private(private),
    };
    debug!(modulus_bits = RSA_MODULUS_BITS, "generated RSA key pair");
    Ok(pair)
}

/// Export a public handle as base64 SPKI DER
pub fn export_public(handle: &AsymmetricKeyHandle) -> Result<String> {
    let der = handle
        .as_public()?
        .to_public_key_der()
        .map_err(|e| CoreError::KeyExport(e.to_string()))?;
    Ok(codec::encode(der.as_bytes()))
}

/// Export a private handle as base64 PKCS#8 DER
///
/// An absent handle exports as `None`; sessions without their own key pair
/// pass through here.
pub fn export_private(handle: Option<&AsymmetricKeyHandle>) -> Result<Option<String>> {
    let Some(handle) = handle else {
        return Ok(None);
    };
    let der = handle
        .as_private()?
        .to_pkcs8_der()
        .map_err(|e| CoreError::KeyExport(e.to_string()))?;
    Ok(Some(codec::encode(der.as_bytes())))
}

/// Import base64 SPKI DER as an encrypt-only handle
pub fn import_public(encoded: &str) -> Result<AsymmetricKeyHandle> {
    let der = codec::decode(encoded)
        .map_err(|e| CoreError::KeyImport(format!("public key is not base64: {e}")))?;
    let key = RsaPublicKey::from_public_key_der(&der)
        .map_err(|e| CoreError::KeyImport(format!("not an RSA SPKI public key: {e}")))?;
    check_modulus(key.size())?;
    Ok(AsymmetricKeyHandle::Public(key))
}

/// Import base64 PKCS#8 DER as a decrypt-only handle
pub fn import_private(encoded: &str) -> Result<AsymmetricKeyHandle> {
    let der = codec::decode(encoded)
        .map_err(|e| CoreError::KeyImport(format!("private key is not base64: {e}")))?;
    let key = RsaPrivateKey::from_pkcs8_der(&der)
        .map_err(|e| CoreError::KeyImport(format!("not an RSA PKCS#8 private key: {e}")))?;
    check_modulus(key.size())?;
    Ok(AsymmetricKeyHandle::Private(key))
}

fn check_modulus(modulus_bytes: usize) -> Result<()> {
    let bits = modulus_bytes * 8;
    if bits < RSA_MIN_MODULUS_BITS {
        return Err(CoreError::KeyImport(format!(
            "RSA modulus of {bits} bits is below {RSA_MIN_MODULUS_BITS}"
        )));
    }
    Ok(())
}

/// Lowercase hex SHA-256 of the public half's SPKI DER, safe to log
pub fn fingerprint(handle: &AsymmetricKeyHandle) -> Result<String> {
    let public = match handle {
        AsymmetricKeyHandle::Public(key) => key.clone(),
        AsymmetricKeyHandle::Private(key) => RsaPublicKey::from(key),
    };
    let der = public
        .to_public_key_der()
        .map_err(|e| CoreError::KeyExport(e.to_string()))?;
    Ok(hex::encode(Sha256::digest(der.as_bytes())))
}
