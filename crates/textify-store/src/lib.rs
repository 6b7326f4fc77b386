//! # TextiFy Store
//!
//! Concrete implementations of the ports defined in `textify-core`.
//! Today that is a single in-memory store plus the fixed seed catalog;
//! a network-backed implementation can replace it behind the same ports.

pub mod memory;
pub mod seed;

pub use memory::{MemoryBlogRepo, MemoryPageRepo, MemoryStore, MemoryToolRepo};
