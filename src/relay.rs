// src/relay.rs
//! Relay identity: one RSA key pair per onion router

use parking_lot::RwLock;
use rand::{CryptoRng, RngCore};
use tracing::{debug, info};

use crate::config::Network;
use crate::core::{
    export_private, export_public, fingerprint, generate_key_pair, generate_key_pair_with,
    rsa_decrypt, KeyPair, Result,
};
use crate::registry::{NodeRecord, NodeRegistry, RegisterNodeBody};

/// What the relay saw last; every field starts out empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayCache {
    pub last_received_encrypted: Option<String>,
    pub last_received_decrypted: Option<String>,
    pub last_destination: Option<u16>,
}

#[derive(Debug)]
pub struct RelayNode {
    node_id: u32,
    keys: KeyPair,
    public_key: String,
    cache: RwLock<RelayCache>,
}

impl RelayNode {
    /// Create relay `node_id` with a fresh key pair from the OS RNG
    pub fn new(node_id: u32) -> Result<Self> {
        Self::from_key_pair(node_id, generate_key_pair()?)
    }

    /// Create relay `node_id` with its key pair drawn from `rng`
    pub fn with_rng<R: RngCore + CryptoRng>(node_id: u32, rng: &mut R) -> Result<Self> {
        Self::from_key_pair(node_id, generate_key_pair_with(rng)?)
    }

    pub fn from_key_pair(node_id: u32, keys: KeyPair) -> Result<Self> {
        let public_key = export_public(&keys.public_key)?;
        info!(node_id, fingerprint = %fingerprint(&keys.public_key)?, "relay identity ready");
        Ok(Self {
            node_id,
            keys,
            public_key,
            cache: RwLock::new(RelayCache::default()),
        })
    }

    pub fn node_id(&self) -> u32 {
        self.node_id
    }

    /// Base64 SPKI public key, as published to the registry
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Base64 PKCS#8 private key
    pub fn private_key(&self) -> Result<Option<String>> {
        export_private(Some(&self.keys.private_key))
    }

    pub fn port(&self, network: &Network) -> Option<u16> {
        network.onion_router_port(self.node_id)
    }

    pub fn registration(&self) -> RegisterNodeBody {
        NodeRecord {
            node_id: self.node_id,
            pub_key: self.public_key.clone(),
        }
    }

    pub fn register(&self, registry: &NodeRegistry) -> Result<NodeRecord> {
        registry.register(self.registration())
    }

    /// Remove the RSA layer addressed to this relay; base64 in, base64 out
    ///
    /// The input is cached before decryption, the output only on success.
    pub fn open_layer(&self, ciphertext_b64: &str) -> Result<String> {
        self.cache.write().last_received_encrypted = Some(ciphertext_b64.to_owned());
        let plaintext = rsa_decrypt(ciphertext_b64, &self.keys.private_key)?;
        self.cache.write().last_received_decrypted = Some(plaintext.clone());
        debug!(node_id = self.node_id, "opened relay layer");
        Ok(plaintext)
    }

    /// Remember the port the last opened message was handed on to
    pub fn record_destination(&self, port: u16) {
        self.cache.write().last_destination = Some(port);
    }

    pub fn last_received_encrypted(&self) -> Option<String> {
        self.cache.read().last_received_encrypted.clone()
    }

    pub fn last_received_decrypted(&self) -> Option<String> {
        self.cache.read().last_received_decrypted.clone()
    }

    pub fn last_destination(&self) -> Option<u16> {
        self.cache.read().last_destination
    }

    pub fn cache(&self) -> RelayCache {
        self.cache.read().clone()
    }
}
