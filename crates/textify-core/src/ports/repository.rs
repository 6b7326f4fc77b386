use async_trait::async_trait;

use crate::domain::{
    BlogPost, BlogPostPatch, NewBlogPost, NewTool, PagePatch, StaticPage, Tool, ToolPatch,
};
use crate::error::RepoError;

/// Read-and-update contract shared by every collection.
///
/// Absent entities are `Ok(None)`, never an error; `RepoError` is reserved
/// for the backing store itself failing.
#[async_trait]
pub trait EntityRepository<T, Patch>: Send + Sync {
    /// List every entity in insertion order.
    async fn fetch_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its identifier.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<T>, RepoError>;

    /// Merge a patch into the entity with this identifier and return the
    /// updated entity, or `None` without side effects when nothing matched.
    async fn update(&self, id: &str, patch: Patch) -> Result<Option<T>, RepoError>;
}

/// Full CRUD contract for collections whose membership is open.
#[async_trait]
pub trait CatalogRepository<T, Draft, Patch>: EntityRepository<T, Patch> {
    /// Store a new entity built from the draft and return it.
    async fn create(&self, draft: Draft) -> Result<T, RepoError>;

    /// Remove the entity with this identifier, reporting whether anything
    /// matched.
    async fn delete(&self, id: &str) -> Result<bool, RepoError>;
}

/// Tools catalog port.
pub trait ToolRepository: CatalogRepository<Tool, NewTool, ToolPatch> {}

/// Blog posts port.
pub trait BlogRepository: CatalogRepository<BlogPost, NewBlogPost, BlogPostPatch> {}

/// Static pages port. Pages are a fixed seeded set, so the contract stops
/// at read and update.
pub trait PageRepository: EntityRepository<StaticPage, PagePatch> {}
