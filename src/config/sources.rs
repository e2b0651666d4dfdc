use super::models::{Config, DEFAULT_PORT};
use config::{ConfigError, Environment, File};
use std::env;
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "BOOKPROXY_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/bookproxy.toml";
const ENV_PREFIX: &str = "BOOKPROXY";
const ENV_SEPARATOR: &str = "__";
const PORT_ENV_VAR: &str = "SERVER_PORT";

/// Load configuration from multiple sources with priority:
/// 1. Defaults (embedded in structs)
/// 2. TOML file (if exists)
/// 3. Environment variables from .env file (via dotenvy)
/// 4. System environment variables
/// 5. `SERVER_PORT` (highest priority for the listening port)
pub fn load(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    // Load .env file if it exists (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    let config_path = path.unwrap_or_else(|| {
        env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    });

    let mut config = load_from_sources(config_path)?;

    let raw_port = env::var(PORT_ENV_VAR).ok();
    config.server.port = resolve_port(raw_port.as_deref(), config.server.port);

    Ok(config)
}

/// Apply the `SERVER_PORT` value on top of the configured port
///
/// Unset keeps `current`; anything that is not a port in 1..=65535 falls
/// back to the default port.
pub fn resolve_port(raw: Option<&str>, current: u16) -> u16 {
    let Some(raw) = raw else {
        return current;
    };

    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => port,
        _ => {
            tracing::warn!(
                value = raw,
                "{} is not a valid port, starting at default port ({})",
                PORT_ENV_VAR,
                DEFAULT_PORT
            );
            DEFAULT_PORT
        }
    }
}

/// Load configuration from a specific path and environment
/// Useful for testing with custom config files
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    // Start with defaults (handled by struct Default implementations)
    // Add TOML file if it exists (optional)
    if config_path.exists() {
        tracing::info!("Loading configuration from: {}", config_path.display());
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::warn!(
            "Configuration file not found at {}, using defaults and environment overrides",
            config_path.display()
        );
    }

    // BOOKPROXY__CATALOG__BASE_URL -> catalog.base_url
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );

    let config = builder.build()?;
    config.try_deserialize()
}
