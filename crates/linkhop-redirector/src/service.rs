use std::sync::Arc;

use crate::error::RedirectorError;
use crate::redirector::Redirector;
use async_trait::async_trait;
use linkhop_core::{ReadRepository, Slug};
use tracing::{debug, trace};

/// Service for handling URL redirects.
///
/// Uses a read-only repository to fetch records. Resolution never writes.
#[derive(Debug)]
pub struct RedirectorService<R> {
    repository: Arc<R>,
}

impl<R> Clone for RedirectorService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ReadRepository> RedirectorService<R> {
    /// Creates a new RedirectorService with the given repository.
    pub fn new(repository: R) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    /// Creates a service over a repository shared with the shortener.
    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ReadRepository> Redirector for RedirectorService<R> {
    async fn resolve(&self, slug: &str) -> crate::Result<String> {
        trace!(slug, "resolving slug");

        // The slug is matched verbatim; an empty one cannot exist.
        let Ok(slug) = Slug::new(slug) else {
            return Err(RedirectorError::NotFound);
        };

        let record = self.repository.find_by_slug(&slug).await?;

        match record {
            Some(link) => {
                debug!(slug = %slug, url = %link.long_url, "resolved slug");
                Ok(link.long_url)
            }
            None => {
                debug!(slug = %slug, "slug not found");
                Err(RedirectorError::NotFound)
            }
        }
    }
}
