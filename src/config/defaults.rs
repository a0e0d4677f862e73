// src/config/defaults.rs
use crate::config::app::{Logging, Network};

pub const DEFAULT_REGISTRY_PORT: u16 = 8080;
pub const DEFAULT_BASE_ONION_ROUTER_PORT: u16 = 4000;
pub const DEFAULT_BASE_USER_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn default_network() -> Network {
    Network {
        registry_port: DEFAULT_REGISTRY_PORT,
        base_onion_router_port: DEFAULT_BASE_ONION_ROUTER_PORT,
        base_user_port: DEFAULT_BASE_USER_PORT,
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}
