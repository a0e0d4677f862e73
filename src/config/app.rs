// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::core::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: Network,
    pub logging: Logging,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Network {
    pub registry_port: u16,
    pub base_onion_router_port: u16,
    pub base_user_port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: default_network(),
            logging: default_logging(),
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        default_network()
    }
}

impl Default for Logging {
    fn default() -> Self {
        default_logging()
    }
}

impl Config {
    /// Parse a TOML document; missing tables and keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Network {
    /// Listening port for relay `node_id`, `None` past `u16::MAX`
    pub fn onion_router_port(&self, node_id: u32) -> Option<u16> {
        u16::try_from(node_id)
            .ok()
            .and_then(|id| self.base_onion_router_port.checked_add(id))
    }

    /// Listening port for user `user_id`, `None` past `u16::MAX`
    pub fn user_port(&self, user_id: u32) -> Option<u16> {
        u16::try_from(user_id)
            .ok()
            .and_then(|id| self.base_user_port.checked_add(id))
    }
}

/// Read and parse the config file at `path`
pub fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    Config::from_toml_str(&content)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process-wide config: `$ONION_CONFIG`, else `onion-config.toml`, else defaults
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            warn!(path = %config_path, "config file not found, using built-in defaults");
            return Config::default();
        }

        load_from(&config_path).unwrap_or_else(|e| {
            warn!(path = %config_path, error = %e, "unreadable config, using built-in defaults");
            Config::default()
        })
    })
}
