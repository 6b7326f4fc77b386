//! # TextiFy Core
//!
//! The domain layer of the TextiFy admin service.
//! This crate contains the entity model, the slug utility, and the
//! repository ports infrastructure must implement. No I/O lives here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
