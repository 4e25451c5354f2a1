//! Redirect resolution for linkhop.
//!
//! [`RedirectorService`] turns a slug taken from a request path into the long
//! URL it was created for, using only the read half of the repository.
//!
//! ```rust
//! use linkhop_core::{Repository, ShortLink, Slug};
//! use linkhop_redirector::{Redirector, RedirectorService};
//! use linkhop_storage::InMemoryRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = InMemoryRepository::new();
//! repo.insert(&ShortLink::new("https://example.com", Slug::new("abc123")?)).await?;
//!
//! let service = RedirectorService::new(repo);
//! let url = service.resolve("abc123").await?;
//! assert_eq!(url, "https://example.com");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod redirector;
pub mod service;

pub use error::{RedirectorError, Result};
pub use redirector::Redirector;
pub use service::RedirectorService;
