use crate::error::StorageError;
use crate::link::ShortLink;
use crate::slug::Slug;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a repository.
///
/// The redirector only ever needs this half of the contract.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the link stored under `slug` (exact, case-sensitive match).
    /// Returns `None` if no record matches.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<ShortLink>>;

    /// Returns every stored link, newest first.
    async fn list(&self) -> Result<Vec<ShortLink>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new link. Returns `Err(Conflict)` if the slug is already taken.
    async fn insert(&self, link: &ShortLink) -> Result<()>;
}
