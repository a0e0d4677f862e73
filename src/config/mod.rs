// src/config/mod.rs
//! Configuration for relay collaborators
//!
//! Central, lazy-loaded global config from TOML with built-in defaults.

pub use app::{load, load_from, Config, Logging, Network};

mod app;
mod defaults;
