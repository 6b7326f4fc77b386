//! Ports - trait definitions the storage layer must implement.
//! These are the "interfaces" that infrastructure must implement.

mod repository;

pub use repository::{
    BlogRepository, CatalogRepository, EntityRepository, PageRepository, ToolRepository,
};
