//! Domain entities - the records the admin service manages.

mod blog;
mod page;
mod seo;
pub mod slug;
mod tool;

pub use blog::{BlogPost, BlogPostPatch, NewBlogPost, Publication};
pub use page::{PageId, PagePatch, StaticPage};
pub use seo::{SeoFields, SeoPatch};
pub use slug::slugify;
pub use tool::{NewTool, Tool, ToolPatch, ToolType};
