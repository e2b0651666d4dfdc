use axum::extract::Query;
use axum::http::{HeaderMap, Uri};
use tracing::warn;

use super::error::ApiError;
use super::utils::{accepts_json, first_param, parse_start_index};
use crate::catalog::BookFilters;

pub const NOT_ACCEPTABLE_MESSAGE: &str =
    "Header Accepts with value application/json not found in request";
pub const MISSING_TITLE_MESSAGE: &str = "Filter tittle not present";

/// Validate a `/books` request and build its filter set
///
/// Content negotiation is checked before the query, so a request failing
/// both answers 415.
pub fn filters_from_request(headers: &HeaderMap, uri: &Uri) -> Result<BookFilters, ApiError> {
    if !accepts_json(headers) {
        warn!("{}", NOT_ACCEPTABLE_MESSAGE);
        return Err(ApiError::UnsupportedMediaType(NOT_ACCEPTABLE_MESSAGE.to_string()));
    }

    let params = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map(|Query(params)| params)
        .unwrap_or_default();
    let param = |key: &str| first_param(&params, key).unwrap_or_default().to_string();

    let tittle = param("tittle");
    if tittle.is_empty() {
        warn!("{}", MISSING_TITLE_MESSAGE);
        return Err(ApiError::NotFound(MISSING_TITLE_MESSAGE.to_string()));
    }

    Ok(BookFilters {
        language: param("lang"),
        tittle,
        author: param("author"),
        subject: param("subject"),
        start_index: parse_start_index(first_param(&params, "startIndex")),
    })
}
