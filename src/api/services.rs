use axum::{
    Json,
    extract::State,
    http::{HeaderMap, Uri},
};
use tracing::{error, info};

use super::{error::ApiError, models::Book, state::AppState, validation::filters_from_request};

/// Book search endpoint (GET /books)
///
/// ## Flow:
/// 1. Require an `Accept` header listing `application/json` or `*/*` (415 otherwise)
/// 2. Require a non-empty `tittle` query parameter (404 otherwise)
/// 3. Query the upstream catalog once
/// 4. Return the mapped books in upstream order (500 on any upstream failure)
pub async fn search_books(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<Vec<Book>>, ApiError> {
    let filters = filters_from_request(&headers, &uri)?;

    let books = state.catalog.search(&filters).await.map_err(|e| {
        error!(error = %e, tittle = %filters.tittle, "Could not retrieve books");
        ApiError::from(e)
    })?;

    info!(tittle = %filters.tittle, count = books.len(), "Books retrieved");
    Ok(Json(books))
}

/// Fallback for unknown paths and for methods other than GET on /books
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
