//! API utility functions
//!
//! Pure, stateless helpers for HTTP request processing, kept apart from the
//! handlers so they can be unit tested directly.

use axum::http::{HeaderMap, header};

/// Returns true when the `Accept` header lists `application/json` or `*/*`
///
/// Only the first `Accept` header is consulted. The value is split on raw
/// bytes, so non-ASCII entries elsewhere in the list do not prevent a match.
/// Entries are compared verbatim after trimming spaces, so media-type
/// parameters such as `application/json; q=0.9` do not match.
pub fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(accept) = headers.get(header::ACCEPT) else {
        return false;
    };

    accept
        .as_bytes()
        .split(|byte| *byte == b',')
        .map(trim_spaces)
        .any(|entry| {
            entry == mime::APPLICATION_JSON.essence_str().as_bytes()
                || entry == mime::STAR_STAR.essence_str().as_bytes()
        })
}

fn trim_spaces(mut entry: &[u8]) -> &[u8] {
    while let [b' ', rest @ ..] = entry {
        entry = rest;
    }
    while let [rest @ .., b' '] = entry {
        entry = rest;
    }
    entry
}

/// First value of `key` in a decoded query string
pub fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// Parses a start index, treating anything unparsable as 0
pub fn parse_start_index(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.parse().ok()).unwrap_or(0)
}
