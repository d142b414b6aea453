//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `BAZAAR_HOST` - Bind address (default: 127.0.0.1)
//! - `BAZAAR_PORT` - Listen port (default: 3000)
//! - `BAZAAR_STORAGE` - `memory`, or a path to the cart storage file
//!   (default: data/local-storage.json)
//! - `BAZAAR_ASSETS_DIR` - Directory containing `photos/` and `static/`
//!   (default: crates/storefront)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::storage::StorageBackend;

const DEFAULT_STORAGE: &str = "data/local-storage.json";
const DEFAULT_ASSETS_DIR: &str = "crates/storefront";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Where the visitor cart is persisted
    pub storage: StorageBackend,
    /// Root of the `photos/` and `static/` asset directories
    pub assets_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            storage: StorageBackend::from_setting(DEFAULT_STORAGE),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("BAZAAR_HOST") {
            Some(value) => value.parse::<IpAddr>().map_err(|e| {
                ConfigError::InvalidEnvVar("BAZAAR_HOST".to_string(), e.to_string())
            })?,
            None => defaults.host,
        };
        let port = match lookup("BAZAAR_PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar("BAZAAR_PORT".to_string(), e.to_string())
            })?,
            None => defaults.port,
        };
        let storage = lookup("BAZAAR_STORAGE")
            .filter(|value| !value.trim().is_empty())
            .map_or(defaults.storage, |value| StorageBackend::from_setting(&value));
        let assets_dir = lookup("BAZAAR_ASSETS_DIR").map_or(defaults.assets_dir, PathBuf::from);

        Ok(Self {
            host,
            port,
            storage,
            assets_dir,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(
            config.storage,
            StorageBackend::File(PathBuf::from("data/local-storage.json"))
        );
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("BAZAAR_HOST", "0.0.0.0"),
            ("BAZAAR_PORT", "8080"),
            ("BAZAAR_STORAGE", "memory"),
            ("BAZAAR_ASSETS_DIR", "/srv/bazaar"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.assets_dir, PathBuf::from("/srv/bazaar"));
    }

    #[test]
    fn test_invalid_port() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("BAZAAR_PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "BAZAAR_PORT"));
    }

    #[test]
    fn test_invalid_host() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("BAZAAR_HOST", "localhost")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "BAZAAR_HOST"));
    }
}
