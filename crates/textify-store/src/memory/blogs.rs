use std::sync::Arc;

use async_trait::async_trait;
use textify_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use textify_core::ports::{BlogRepository, CatalogRepository, EntityRepository};
use textify_core::RepoError;

use super::MemoryStore;

/// Blog posts adapter over [`MemoryStore`].
pub struct MemoryBlogRepo {
    store: Arc<MemoryStore>,
}

impl MemoryBlogRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntityRepository<BlogPost, BlogPostPatch> for MemoryBlogRepo {
    async fn fetch_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.store.blog_posts.read().await.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.store.blog_posts.read().await;
        Ok(posts.iter().find(|post| post.id == id).cloned())
    }

    async fn update(&self, id: &str, patch: BlogPostPatch) -> Result<Option<BlogPost>, RepoError> {
        let mut posts = self.store.blog_posts.write().await;
        let Some(post) = posts.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        };
        post.apply(patch);
        Ok(Some(post.clone()))
    }
}

#[async_trait]
impl CatalogRepository<BlogPost, NewBlogPost, BlogPostPatch> for MemoryBlogRepo {
    async fn create(&self, draft: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = BlogPost::new(draft);
        let mut posts = self.store.blog_posts.write().await;
        posts.push(post.clone());
        Ok(post)
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        let mut posts = self.store.blog_posts.write().await;
        let before = posts.len();
        posts.retain(|post| post.id != id);
        Ok(posts.len() < before)
    }
}

impl BlogRepository for MemoryBlogRepo {}
