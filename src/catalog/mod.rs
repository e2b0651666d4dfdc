//! Upstream book catalog (Google Books volumes API)
//!
//! This module owns everything on the outbound side of a search:
//!
//! - [`build_query`] - turns a [`BookFilters`] set into the upstream query string
//! - [`GoogleBooksClient`] - performs the single outbound call and decodes the envelope
//! - [`VolumesResponse`] - upstream wire shape, projected 1:1 into [`Book`]s
//!
//! The HTTP layer only depends on the [`BookCatalog`] trait, so any
//! implementation (including in-memory ones in tests) can back the API.

mod client;
mod query;
mod traits;
pub(crate) mod types;
mod volumes;

pub use client::{CatalogError, GoogleBooksClient};
pub use query::build_query;
pub use traits::BookCatalog;
pub use types::{Book, BookFilters};
pub use volumes::{AccessInfo, SaleInfo, VolumeInfo, VolumeItem, VolumesResponse};
