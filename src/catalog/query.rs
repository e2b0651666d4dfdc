//! Upstream query-string construction
//!
//! The layout is fixed by the upstream contract and by existing clients:
//! `q=` terms joined with `+`, an optional `langRestrict`, and a start index
//! that is always emitted as `0`. Only spaces are escaped.

use super::types::BookFilters;

const TERM_SEPARATOR: &str = "+";

/// Start index sent upstream. The filter's own start index is never forwarded.
const FORWARDED_START_INDEX: u32 = 0;

/// Build the query string (without the leading `?`) for `/v1/volumes`
pub fn build_query(filters: &BookFilters) -> String {
    let terms: Vec<String> = [
        ("inauthor", filters.author.as_str()),
        ("intitle", filters.tittle.as_str()),
        ("subject", filters.subject.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(key, value)| format!("{key}:{value}"))
    .collect();

    let mut query = format!("q={}", terms.join(TERM_SEPARATOR));

    if !filters.language.is_empty() {
        query.push_str("&langRestrict=");
        query.push_str(&filters.language);
    }

    query.push_str(&format!("&startIndex={FORWARDED_START_INDEX}"));

    query.replace(' ', "%20")
}
