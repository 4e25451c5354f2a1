use crate::slug::Slug;
use jiff::Timestamp;
use uuid::Uuid;

/// A stored mapping from a slug to the long URL it redirects to.
///
/// Records are written once and never updated, so `updated_at` always
/// equals `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    /// Time-ordered identifier assigned at creation.
    pub id: Uuid,
    /// The original URL that was shortened.
    pub long_url: String,
    /// The public identifier.
    pub slug: Slug,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ShortLink {
    /// Creates a new, not yet persisted record stamped with the current time.
    pub fn new(long_url: impl Into<String>, slug: Slug) -> Self {
        // Storage keeps microseconds.
        let now = Timestamp::now();
        let now = Timestamp::from_microsecond(now.as_microsecond()).unwrap_or(now);
        Self {
            id: Uuid::now_v7(),
            long_url: long_url.into(),
            slug,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy of this record carrying a different slug.
    ///
    /// Used when a slug collides and a fresh one is drawn; the id and
    /// timestamps stay the same.
    pub fn with_slug(&self, slug: Slug) -> Self {
        Self {
            slug,
            ..self.clone()
        }
    }

    /// Ordering used by listings: newest first, ties broken by id.
    pub fn newest_first(a: &ShortLink, b: &ShortLink) -> std::cmp::Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    }
}
