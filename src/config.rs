//! Process configuration read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime settings for the diary server
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// PostgreSQL URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// Directory holding the browser front-end, served at `/`; the repository
    /// ships one under `static/`
    pub static_dir: Option<PathBuf>,
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {0:?}")]
    InvalidBindAddr(String),
    #[error("invalid DATABASE_MAX_CONNECTIONS {0:?}")]
    InvalidMaxConnections(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr: SocketAddr = match get("BIND_ADDR") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(raw.clone()))?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(DEFAULT_BIND_ADDR.to_string()))?,
        };

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxConnections(raw)),
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            bind_addr,
            database_url: get("DATABASE_URL"),
            database_max_connections,
            static_dir: get("STATIC_DIR").map(PathBuf::from),
        })
    }
}
