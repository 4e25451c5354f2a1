use crate::error::ShortenerError;
use crate::link::ShortLink;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Validates `long_url`, assigns it a fresh slug and persists the record.
    async fn shorten(&self, long_url: &str) -> Result<ShortLink>;

    /// Returns every stored link, newest first.
    async fn list(&self) -> Result<Vec<ShortLink>>;
}
