use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Upstream catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Base URL; `/v1/volumes` is appended per request
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Headers sent with every upstream request
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
            headers: default_headers(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.googleapis.com/books".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    3
}

fn default_request_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("bookproxy/{}", env!("CARGO_PKG_VERSION"))
}

/// `Host` is sent on the wire as configured, replacing the host derived from
/// `base_url`. Drop it from `[catalog.headers]` if the upstream front end
/// routes on the Host header.
fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Cache-Control".to_string(), "no-cache".to_string()),
        ("Host".to_string(), "no-cache".to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.bind_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.catalog.base_url, "https://www.googleapis.com/books");
        assert_eq!(config.catalog.request_timeout_secs, 5);
        assert_eq!(config.catalog.headers.len(), 2);
    }

    #[test]
    fn test_partial_catalog_section_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[catalog]
base_url = "http://127.0.0.1:9999"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.catalog.connect_timeout_secs, 3);
        assert_eq!(config.catalog.headers["Cache-Control"], "no-cache");
        assert_eq!(config.server.port, DEFAULT_PORT);
    }
}
