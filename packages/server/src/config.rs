//! Server configuration loaded from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3003";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_addr
            .parse()
            .map_err(|e| ConfigError(format!("invalid BIND_ADDR '{bind_addr}': {e}")))?;

        let static_dir = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "static".into())
            .into();

        Ok(Self {
            bind_addr,
            static_dir,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3003)),
            static_dir: PathBuf::from("static"),
        }
    }
}
