//! Application state - shared across all handlers.

use std::sync::Arc;

use textify_core::ports::{BlogRepository, PageRepository, ToolRepository};
use textify_store::{MemoryBlogRepo, MemoryPageRepo, MemoryStore, MemoryToolRepo};

use crate::config::AppConfig;

/// Shared application state. Handlers only see the ports, so swapping the
/// in-memory store for a network-backed one stays local to this module.
#[derive(Clone)]
pub struct AppState {
    pub tools: Arc<dyn ToolRepository>,
    pub blog_posts: Arc<dyn BlogRepository>,
    pub pages: Arc<dyn PageRepository>,
    /// Public site base for canonical URL defaulting.
    pub site_base_url: String,
}

impl AppState {
    /// Build the state over a freshly seeded store.
    pub fn new(config: &AppConfig) -> Self {
        let state = Self::with_store(
            Arc::new(MemoryStore::seeded()),
            config.site_base_url.clone(),
        );
        tracing::info!("Application state initialized with seeded catalog");
        state
    }

    /// Build the state over an explicit store.
    pub fn with_store(store: Arc<MemoryStore>, site_base_url: String) -> Self {
        Self {
            tools: Arc::new(MemoryToolRepo::new(store.clone())),
            blog_posts: Arc::new(MemoryBlogRepo::new(store.clone())),
            pages: Arc::new(MemoryPageRepo::new(store)),
            site_base_url,
        }
    }
}
