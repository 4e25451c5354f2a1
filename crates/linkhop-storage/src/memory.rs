use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use linkhop_core::repository::{ReadRepository, Repository, Result};
use linkhop_core::{ShortLink, Slug, StorageError};

/// In-memory implementation of the repository contract using DashMap.
///
/// Keys are slugs, so the map itself is the uniqueness constraint:
/// `DashMap::entry` holds the shard lock across the check and the insert.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<Slug, ShortLink>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<ShortLink>> {
        Ok(self.storage.get(slug).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<ShortLink>> {
        let mut links: Vec<ShortLink> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        links.sort_by(ShortLink::newest_first);
        Ok(links)
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, link: &ShortLink) -> Result<()> {
        match self.storage.entry(link.slug.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(link.slug.to_string())),
            Entry::Vacant(vacant) => {
                vacant.insert(link.clone());
                Ok(())
            }
        }
    }
}
