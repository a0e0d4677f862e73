// src/user.rs
//! User endpoint state: last message sent, last message received per user

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Network;
use crate::core::Result;
use crate::error::CoreError;

/// Submission payload: what to send and to whom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageBody {
    pub message: String,
    pub destination_user_id: u32,
}

/// Delivery payload posted to the destination user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// A send resolved to the destination user's port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub port: u16,
    pub body: MessageBody,
}

#[derive(Debug, Default)]
struct UserState {
    last_sent: Option<String>,
    last_received: HashMap<u32, String>,
}

#[derive(Debug)]
pub struct UserNode {
    user_id: u32,
    state: RwLock<UserState>,
}

impl UserNode {
    pub fn new(user_id: u32) -> Self {
        Self {
            user_id,
            state: RwLock::new(UserState::default()),
        }
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    pub fn port(&self, network: &Network) -> Option<u16> {
        network.user_port(self.user_id)
    }

    /// Record `body.message` as sent and resolve where it goes
    ///
    /// Fails with [`CoreError::PortOutOfRange`] before touching any state.
    pub fn send(&self, network: &Network, body: SendMessageBody) -> Result<OutgoingMessage> {
        let port = network
            .user_port(body.destination_user_id)
            .ok_or(CoreError::PortOutOfRange(body.destination_user_id))?;

        self.state.write().last_sent = Some(body.message.clone());
        debug!(from = self.user_id, to = body.destination_user_id, port, "message queued");
        Ok(OutgoingMessage {
            port,
            body: MessageBody {
                message: body.message,
            },
        })
    }

    /// Record a delivery confirmed by `destination_user_id`
    pub fn confirm_delivery(&self, destination_user_id: u32, message: &str) {
        self.state
            .write()
            .last_received
            .insert(destination_user_id, message.to_owned());
    }

    /// Accept a message delivered to this user
    pub fn receive(&self, body: MessageBody) {
        self.state
            .write()
            .last_received
            .insert(self.user_id, body.message);
    }

    pub fn last_sent_message(&self) -> Option<String> {
        self.state.read().last_sent.clone()
    }

    /// Last message delivered to this user
    pub fn last_received_message(&self) -> Option<String> {
        self.last_received_from(self.user_id)
    }

    pub fn last_received_from(&self, user_id: u32) -> Option<String> {
        self.state.read().last_received.get(&user_id).cloned()
    }
}
