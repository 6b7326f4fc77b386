use std::sync::Arc;

use async_trait::async_trait;
use textify_core::domain::{NewTool, Tool, ToolPatch};
use textify_core::ports::{CatalogRepository, EntityRepository, ToolRepository};
use textify_core::RepoError;

use super::MemoryStore;

/// Tools adapter over [`MemoryStore`].
pub struct MemoryToolRepo {
    store: Arc<MemoryStore>,
}

impl MemoryToolRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntityRepository<Tool, ToolPatch> for MemoryToolRepo {
    async fn fetch_all(&self) -> Result<Vec<Tool>, RepoError> {
        Ok(self.store.tools.read().await.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Tool>, RepoError> {
        let tools = self.store.tools.read().await;
        Ok(tools.iter().find(|tool| tool.id == id).cloned())
    }

    async fn update(&self, id: &str, patch: ToolPatch) -> Result<Option<Tool>, RepoError> {
        let mut tools = self.store.tools.write().await;
        let Some(tool) = tools.iter_mut().find(|tool| tool.id == id) else {
            return Ok(None);
        };
        tool.apply(patch);
        Ok(Some(tool.clone()))
    }
}

#[async_trait]
impl CatalogRepository<Tool, NewTool, ToolPatch> for MemoryToolRepo {
    async fn create(&self, draft: NewTool) -> Result<Tool, RepoError> {
        let tool = Tool::new(draft);
        let mut tools = self.store.tools.write().await;
        tools.push(tool.clone());
        Ok(tool)
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        let mut tools = self.store.tools.write().await;
        let before = tools.len();
        tools.retain(|tool| tool.id != id);
        Ok(tools.len() < before)
    }
}

impl ToolRepository for MemoryToolRepo {}
