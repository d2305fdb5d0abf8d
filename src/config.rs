//! Host server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0:?}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_raw(std::env::var("PORT").ok().as_deref(), std::env::var("BIND_ADDR").ok().as_deref())
    }

    /// Parse from raw values; blank values take the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a non-numeric or zero port, or a bind
    /// address that is not an IP literal.
    pub fn from_raw(port: Option<&str>, bind_addr: Option<&str>) -> Result<Self, ConfigError> {
        let port = match non_blank(port) {
            None => DEFAULT_PORT,
            Some(raw) => match raw.parse::<u16>() {
                Ok(0) | Err(_) => return Err(ConfigError::InvalidPort(raw.to_owned())),
                Ok(port) => port,
            },
        };
        let bind_addr = match non_blank(bind_addr) {
            None => DEFAULT_BIND_ADDR,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidBindAddr(raw.to_owned()))?,
        };
        Ok(Self { bind_addr, port })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
