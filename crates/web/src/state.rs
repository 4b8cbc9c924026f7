use std::sync::Arc;

use bookrack_core::BookStore;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State`
/// extractor. Wrapped in `Arc` so cloning is cheap; nothing in here is
/// mutable between requests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    store: Arc<dyn BookStore>,
    config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn BookStore>, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(InnerState { store, config }),
        }
    }

    pub fn store(&self) -> &dyn BookStore {
        self.inner.store.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
