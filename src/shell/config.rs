// Runtime configuration read from the environment.
//
// PORTAL_HOST      bind address, default 0.0.0.0
// PORTAL_PORT      bind port, default 8080
// PORTAL_SNAPSHOT  optional JSON teacher snapshot, loaded at startup and saved on shutdown

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub snapshot: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("PORTAL_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORTAL_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORTAL_PORT is not a port number: {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        let snapshot = lookup("PORTAL_SNAPSHOT")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self {
            host,
            port,
            snapshot,
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
