//! HTTP client for the Google Books volumes endpoint

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

use super::query::build_query;
use super::traits::BookCatalog;
use super::types::{Book, BookFilters};
use super::volumes::VolumesResponse;
use crate::config::CatalogConfig;

const VOLUMES_PATH: &str = "/v1/volumes";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("invalid request header '{0}'")]
    InvalidHeader(String),

    #[error("error while trying to make a request to Google Books API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("error while trying to make a request to Google Books API. Status code {0}")]
    Status(u16),

    #[error("error while trying to parse Google Books API response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Google Books catalog client
///
/// Each search performs exactly one GET with no retry. Idle connections are
/// not kept, so concurrent searches never share a connection.
#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl GoogleBooksClient {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(&config.user_agent)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| CatalogError::ClientBuild(e.to_string()))?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| CatalogError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| CatalogError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    /// Full upstream URL for a filter set
    pub fn volumes_url(&self, filters: &BookFilters) -> String {
        format!("{}{}?{}", self.base_url, VOLUMES_PATH, build_query(filters))
    }

    async fn fetch(&self, url: &str) -> Result<Bytes> {
        let response = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|e| {
                error!(url, error = %e, "Request to Google Books API failed");
                CatalogError::Request(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let err = CatalogError::Status(status.as_u16());
            // Drain the body so the upstream diagnostic ends up in the logs
            let body = response.text().await.unwrap_or_default();
            error!(url, status = status.as_u16(), %body, "{}", err);
            return Err(err);
        }

        Ok(response.bytes().await?)
    }
}

/// Decode a `/v1/volumes` body and project it into books
pub fn decode_volumes(body: &Bytes) -> Result<Vec<Book>> {
    let envelope: VolumesResponse = serde_json::from_slice(body).map_err(|e| {
        error!(error = %e, "Error while trying to parse Google Books API response");
        CatalogError::Decode(e)
    })?;

    debug!(
        total_items = envelope.total_items,
        items = envelope.items.len(),
        "Decoded Google Books API response"
    );

    Ok(envelope.into_books())
}

#[async_trait]
impl BookCatalog for GoogleBooksClient {
    async fn search(&self, filters: &BookFilters) -> Result<Vec<Book>> {
        let url = self.volumes_url(filters);
        info!(%url, "Making request to Google Books API");

        let body = self.fetch(&url).await?;
        decode_volumes(&body)
    }
}
