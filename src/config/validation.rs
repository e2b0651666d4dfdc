use super::models::{CatalogConfig, Config};
use reqwest::Url;
use reqwest::header::{HeaderName, HeaderValue};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Catalog base_url '{url}' is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid catalog base_url scheme '{scheme}', expected 'http://' or 'https://'")]
    InvalidScheme { scheme: String },

    #[error("Timeout must be positive: {field} = 0")]
    ZeroTimeout { field: String },

    #[error("Invalid catalog header '{name}'")]
    InvalidHeader { name: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_catalog(&config.catalog)?;
    Ok(())
}

fn validate_catalog(catalog: &CatalogConfig) -> Result<(), ValidationError> {
    let url = Url::parse(&catalog.base_url).map_err(|e| ValidationError::InvalidBaseUrl {
        url: catalog.base_url.clone(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ValidationError::InvalidScheme {
            scheme: url.scheme().to_string(),
        });
    }

    if catalog.connect_timeout_secs == 0 {
        return Err(ValidationError::ZeroTimeout {
            field: "connect_timeout_secs".to_string(),
        });
    }

    if catalog.request_timeout_secs == 0 {
        return Err(ValidationError::ZeroTimeout {
            field: "request_timeout_secs".to_string(),
        });
    }

    for (name, value) in &catalog.headers {
        let valid = HeaderName::from_bytes(name.as_bytes()).is_ok()
            && HeaderValue::from_str(value).is_ok();
        if !valid {
            return Err(ValidationError::InvalidHeader { name: name.clone() });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_unparsable_base_url() {
        let mut config = Config::default();
        config.catalog.base_url = "not a url".to_string();

        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = Config::default();
        config.catalog.base_url = "ftp://books.example.com".to_string();

        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidScheme { scheme } if scheme == "ftp"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = Config::default();
        config.catalog.request_timeout_secs = 0;

        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ValidationError::ZeroTimeout { field } if field == "request_timeout_secs"));
    }

    #[test]
    fn test_rejects_bad_header_value() {
        let mut config = Config::default();
        config
            .catalog
            .headers
            .insert("X-Trace".to_string(), "line\nbreak".to_string());

        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidHeader { name } if name == "X-Trace"));
    }
}
