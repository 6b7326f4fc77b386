//! In-memory store and the repository adapters over it.

mod blogs;
mod pages;
mod tools;

pub use blogs::MemoryBlogRepo;
pub use pages::MemoryPageRepo;
pub use tools::MemoryToolRepo;

use textify_core::domain::{BlogPost, StaticPage, Tool};
use tokio::sync::RwLock;

use crate::seed;

/// Owner of the three entity collections, behind async locks.
///
/// Collections keep insertion order and are only reachable through the
/// repository adapters. Data is lost on process restart.
pub struct MemoryStore {
    tools: RwLock<Vec<Tool>>,
    blog_posts: RwLock<Vec<BlogPost>>,
    pages: RwLock<Vec<StaticPage>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            tools: RwLock::new(Vec::new()),
            blog_posts: RwLock::new(Vec::new()),
            pages: RwLock::new(Vec::new()),
        }
    }

    /// Store pre-loaded with the fixed catalog.
    pub fn seeded() -> Self {
        Self {
            tools: RwLock::new(seed::tools()),
            blog_posts: RwLock::new(seed::blog_posts()),
            pages: RwLock::new(seed::pages()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
