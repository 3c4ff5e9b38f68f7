//! Runtime configuration.
//!
//! Values come from three layers, highest precedence first: command-line
//! flags (and their environment variables), an optional TOML file, and
//! the built-in defaults below.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8502
//!
//! [database]
//! path = "muawin.db"
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

/// Default listen address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8502;

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "muawin.db";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Record store settings
    pub database: DatabaseConfig,
}

/// `[server]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// `[database]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file holding the `patients` table
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path`, or returns the defaults when no
    /// file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        database: Option<PathBuf>,
        host: Option<String>,
        port: Option<u16>,
    ) -> Self {
        if let Some(path) = database {
            self.database.path = path;
        }
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    /// Resolves the listen address. The host may be an IP literal or a
    /// name such as `localhost`; the first resolved address is used.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ServerConfig { host, port } = &self.server;
        let invalid = |reason: String| {
            Error::config(format!("Invalid listen address {host}:{port}: {reason}"))
        };
        (host.as_str(), *port)
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_string()))
    }
}
