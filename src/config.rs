//! Server configuration from environment variables.
//!
//! The static server only needs to know where to listen and which directory
//! holds the built site. Both have defaults suitable for local development.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "site";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
}

/// Runtime configuration for the static asset server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub site_dir: PathBuf,
}

impl ServerConfig {
    /// Read configuration from `PORT` and `SITE_DIR`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `PORT` is set but not a valid
    /// port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("PORT").ok(), std::env::var("SITE_DIR").ok())
    }

    /// Pure core of `from_env`, taking raw variable values directly.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `port` is present but unparseable.
    pub fn from_vars(port: Option<String>, site_dir: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let site_dir = PathBuf::from(site_dir.unwrap_or_else(|| DEFAULT_SITE_DIR.to_owned()));
        Ok(Self { port, site_dir })
    }
}
