//! Configuration management for bookproxy
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables
//! 4. The legacy `SERVER_PORT` variable (listening port only)
//!
//! # Usage
//!
//! ```no_run
//! use bookproxy::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Server listening on: {}", config.server.bind_addr());
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `BOOKPROXY__<section>__<key>`
//!
//! Examples:
//! - `BOOKPROXY__SERVER__PORT=9000`
//! - `BOOKPROXY__CATALOG__BASE_URL=http://localhost:8081`
//! - `BOOKPROXY__CATALOG__REQUEST_TIMEOUT_SECS=10`
//!
//! `SERVER_PORT` is honoured last; an unparsable value starts the server on 8080.
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/bookproxy.toml`.
//! This can be overridden using the `BOOKPROXY_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{CatalogConfig, Config, DEFAULT_PORT, ServerConfig};
pub use sources::resolve_port;
pub use validation::ValidationError;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or
    /// validation fails (bad base URL, zero timeout, invalid header).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Load configuration, reading the file from `path` when given
    pub fn load_with(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config = sources::load(path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files. `SERVER_PORT`
    /// is not consulted.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
