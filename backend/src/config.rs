//! Process configuration read from the environment.
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ROSTER_ENV: &str = "SAVINGS_TRACKER_ROSTER";
pub const ADDR_ENV: &str = "SAVINGS_TRACKER_ADDR";
pub const CORS_ORIGIN_ENV: &str = "SAVINGS_TRACKER_CORS_ORIGIN";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Roster file; the built-in roster is used when unset
    pub roster_path: Option<PathBuf>,
    pub bind_addr: SocketAddr,
    pub cors_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = get(ADDR_ENV)
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .with_context(|| format!("{} must be a socket address like {}", ADDR_ENV, DEFAULT_ADDR))?;

        Ok(Self {
            roster_path: get(ROSTER_ENV).map(PathBuf::from),
            bind_addr,
            cors_origin: get(CORS_ORIGIN_ENV).unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        })
    }
}
