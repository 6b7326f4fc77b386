use std::sync::Arc;

use async_trait::async_trait;
use textify_core::domain::{PagePatch, StaticPage};
use textify_core::ports::{EntityRepository, PageRepository};
use textify_core::RepoError;

use super::MemoryStore;

/// Static pages adapter over [`MemoryStore`]. Pages are seeded once; the
/// port exposes no create or delete.
pub struct MemoryPageRepo {
    store: Arc<MemoryStore>,
}

impl MemoryPageRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntityRepository<StaticPage, PagePatch> for MemoryPageRepo {
    async fn fetch_all(&self) -> Result<Vec<StaticPage>, RepoError> {
        Ok(self.store.pages.read().await.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<StaticPage>, RepoError> {
        let pages = self.store.pages.read().await;
        Ok(pages.iter().find(|page| page.id == id).cloned())
    }

    async fn update(&self, id: &str, patch: PagePatch) -> Result<Option<StaticPage>, RepoError> {
        let mut pages = self.store.pages.write().await;
        let Some(page) = pages.iter_mut().find(|page| page.id == id) else {
            return Ok(None);
        };
        page.apply(patch);
        Ok(Some(page.clone()))
    }
}

impl PageRepository for MemoryPageRepo {}
