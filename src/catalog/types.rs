use serde::{Deserialize, Serialize};

/// Normalized search parameters taken from a validated `/books` request
///
/// `tittle` is guaranteed non-empty once the request validator has produced
/// the value; the other filters are empty strings when not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilters {
    pub language: String,
    pub tittle: String,
    pub author: String,
    pub subject: String,
    pub start_index: u32,
}

/// Client-facing book representation returned by `GET /books`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub language: String,
    pub tittle: String,
    pub authors: Vec<String>,
    pub subjects: Vec<String>,
    pub publisher: String,
    pub published_date: String,
    pub number_of_pages: i64,
    pub description: String,
    pub ebook: bool,
    pub public_domain: bool,
    #[serde(rename = "LinkToBuy")]
    pub link_to_buy: String,
}
