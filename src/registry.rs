// src/registry.rs
//! In-memory node registry
//!
//! Relays publish `{ nodeId, pubKey }` here and clients read the full list
//! back. The registry is an ordinary value owned by whoever serves it; all
//! access goes through one lock.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{import_public, Result};
use crate::error::CoreError;

/// One registered relay and its base64 SPKI public key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub node_id: u32,
    pub pub_key: String,
}

/// Registration payload, identical on the wire to a stored record
pub type RegisterNodeBody = NodeRecord;

/// Registry listing payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetNodeRegistryBody {
    pub nodes: Vec<NodeRecord>,
}

#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: RwLock<Vec<NodeRecord>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a relay's record, keeping registration order
    ///
    /// The public key must import as an RSA SPKI key and `nodeId` must be new.
    pub fn register(&self, body: RegisterNodeBody) -> Result<NodeRecord> {
        import_public(&body.pub_key)?;

        let mut nodes = self.nodes.write();
        if nodes.iter().any(|node| node.node_id == body.node_id) {
            warn!(node_id = body.node_id, "rejected duplicate node registration");
            return Err(CoreError::NodeAlreadyRegistered(body.node_id));
        }
        nodes.push(body.clone());
        debug!(node_id = body.node_id, total = nodes.len(), "registered node");
        Ok(body)
    }

    pub fn get(&self, node_id: u32) -> Option<NodeRecord> {
        self.nodes
            .read()
            .iter()
            .find(|node| node.node_id == node_id)
            .cloned()
    }

    pub fn snapshot(&self) -> GetNodeRegistryBody {
        GetNodeRegistryBody {
            nodes: self.nodes.read().clone(),
        }
    }

    /// Serialize the listing as the `{ "nodes": [...] }` JSON body
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    pub fn len(&self) -> usize {
        self.nodes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.read().is_empty()
    }
}
