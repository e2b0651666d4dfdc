pub mod api;
pub mod catalog;
pub mod config;
pub mod observability;
