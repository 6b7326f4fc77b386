//! # TextiFy Admin API
//!
//! Administrative HTTP service for the TextiFy content catalog: the tools
//! listing, blog posts, and the fixed set of legal pages. Everything is
//! served from the in-memory store in `textify-store`.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
