//! Shared state builders for the HTTP tests.

use std::sync::Arc;

use admin_api::state::AppState;
use textify_store::MemoryStore;

pub const BASE_URL: &str = "https://example.com";

/// App state over a freshly seeded store, as `main` builds it.
pub fn seeded_state() -> AppState {
    AppState::with_store(Arc::new(MemoryStore::seeded()), BASE_URL.to_string())
}
