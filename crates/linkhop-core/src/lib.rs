//! Core types and traits for the linkhop URL shortener.
//!
//! This crate provides the domain model shared by the shortener, the
//! redirector and the storage backends.

pub mod error;
pub mod link;
pub mod repository;
pub mod shortener;
pub mod slug;

pub use error::{ShortenerError, StorageError};
pub use link::ShortLink;
pub use repository::{ReadRepository, Repository};
pub use shortener::Shortener;
pub use slug::Slug;
