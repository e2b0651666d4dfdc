//! API models for the bookproxy HTTP surface.
//!
//! `GET /books` answers with a JSON array of [`Book`]s; every failure
//! answers with an [`ErrorResponse`]:
//!
//! ```json
//! { "code": "NOT_FOUND", "message": "Filter tittle not present" }
//! ```

use serde::Serialize;

pub use crate::catalog::{Book, BookFilters};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}
