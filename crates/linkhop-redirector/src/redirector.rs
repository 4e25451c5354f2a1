use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a slug to the long URL stored for it.
    /// Returns `Err(NotFound)` if no record matches.
    async fn resolve(&self, slug: &str) -> Result<String>;
}
