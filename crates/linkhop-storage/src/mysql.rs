use async_trait::async_trait;
use jiff::Timestamp;
use linkhop_core::repository::{ReadRepository, Repository, Result};
use linkhop_core::{ShortLink, Slug, StorageError};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use tracing::debug;
use uuid::Uuid;

/// MySQL implementation of the repository contract.
///
/// Rows live in `short_links` (see `ddl/mysql/short_links.sql`). The `slug`
/// column uses `ascii_bin`, so the unique index and lookups are
/// case-sensitive. Timestamps are stored as Unix microseconds.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn parse_timestamp(column: &str, micros: i64) -> Result<Timestamp> {
    Timestamp::from_microsecond(micros).map_err(|e| {
        StorageError::InvalidData(format!("invalid {column} timestamp '{micros}': {e}"))
    })
}

fn row_to_link(row: &MySqlRow) -> Result<ShortLink> {
    let id: String = row.try_get("id").map_err(map_sqlx_error)?;
    let long_url: String = row.try_get("long_url").map_err(map_sqlx_error)?;
    let slug: String = row.try_get("slug").map_err(map_sqlx_error)?;
    let created_at: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;
    let updated_at: i64 = row.try_get("updated_at").map_err(map_sqlx_error)?;

    let id = Uuid::parse_str(&id)
        .map_err(|e| StorageError::InvalidData(format!("invalid id '{id}': {e}")))?;

    Ok(ShortLink {
        id,
        long_url,
        slug: Slug::new_unchecked(slug),
        created_at: parse_timestamp("created_at", created_at)?,
        updated_at: parse_timestamp("updated_at", updated_at)?,
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<ShortLink>> {
        let row = sqlx::query(
            r#"
            SELECT id, long_url, slug, created_at, updated_at
            FROM short_links
            WHERE slug = ?
            LIMIT 1
            "#,
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_link).transpose()
    }

    async fn list(&self) -> Result<Vec<ShortLink>> {
        let rows = sqlx::query(
            r#"
            SELECT id, long_url, slug, created_at, updated_at
            FROM short_links
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(count = rows.len(), "listed short links");
        rows.iter().map(row_to_link).collect()
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn insert(&self, link: &ShortLink) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO short_links (id, long_url, slug, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(link.id.to_string())
        .bind(&link.long_url)
        .bind(link.slug.as_str())
        .bind(link.created_at.as_microsecond())
        .bind(link.updated_at.as_microsecond())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(StorageError::Conflict(link.slug.to_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }
}
