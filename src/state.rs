use crate::service::ProductService;
use crate::store::DocumentStore;
use std::sync::Arc;
use std::time::Instant;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<Arc<str>>) -> Self {
        Self {
            products: ProductService::new(store, collection),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
