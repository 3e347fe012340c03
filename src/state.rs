//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::keys::Keyspace;
use crate::infrastructure::store::KeyValueStore;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<dyn KeyValueStore>>,
    /// Same backend the engine uses; kept for health checks.
    pub store: Arc<dyn KeyValueStore>,
    /// Origin prepended to codes in responses, without a trailing slash.
    pub base_url: String,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: Keyspace, base_url: &str) -> Self {
        Self {
            shortener: Arc::new(ShortenerService::new(store.clone(), keys)),
            store,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the public URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
