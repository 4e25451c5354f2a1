//! URL shortener service implementation.
//!
//! This crate turns a long URL into a stored [`ShortLink`](linkhop_core::ShortLink)
//! and lists what has been stored. Core types are re-exported from
//! `linkhop_core`.

pub mod service;

pub use linkhop_core::{Shortener, ShortenerError};
pub use service::{ShortenerService, ShortenerSettings, DEFAULT_MAX_ATTEMPTS};
