use async_trait::async_trait;

use super::client::CatalogError;
use super::types::{Book, BookFilters};

/// Book search backend used by the HTTP layer
///
/// Implementations perform at most one upstream lookup per call and return
/// books in upstream order. Errors are terminal for the current request.
#[async_trait]
pub trait BookCatalog: Send + Sync {
    async fn search(&self, filters: &BookFilters) -> Result<Vec<Book>, CatalogError>;
}
