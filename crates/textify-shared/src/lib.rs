//! # TextiFy Shared
//!
//! Types shared between the admin API and its clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
