use std::sync::Arc;

use crate::catalog::BookCatalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn BookCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn BookCatalog>) -> Self {
        Self { catalog }
    }
}
