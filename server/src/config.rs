//! Server configuration parsed from environment variables.
//!
//! Leptos options (site root, default address) come from the workspace
//! `Cargo.toml` via `get_configuration`. `HOST` and `PORT` override the
//! listen address so container platforms can inject it.

use std::net::{IpAddr, SocketAddr};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}': expected an integer in 1..=65535")]
    InvalidPort(String),
    #[error("invalid HOST '{0}': expected an IP address")]
    InvalidHost(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build config from the environment, falling back to `default_addr`.
    ///
    /// Optional:
    /// - `HOST`: bind address, e.g. `0.0.0.0`
    /// - `PORT`: bind port
    pub fn from_env(default_addr: SocketAddr) -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").ok();
        let port = std::env::var("PORT").ok();
        let addr = resolve_addr(default_addr, host.as_deref(), port.as_deref())?;
        Ok(Self { addr })
    }
}

pub(crate) fn resolve_addr(
    default_addr: SocketAddr,
    host: Option<&str>,
    port: Option<&str>,
) -> Result<SocketAddr, ConfigError> {
    let ip = match host.map(str::trim).filter(|h| !h.is_empty()) {
        Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost(raw.to_owned()))?,
        None => default_addr.ip(),
    };
    let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
        Some(raw) => parse_port(raw)?,
        None => default_addr.port(),
    };
    Ok(SocketAddr::new(ip, port))
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort(raw.to_owned())),
        Ok(port) => Ok(port),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
