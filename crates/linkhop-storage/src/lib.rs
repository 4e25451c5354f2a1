//! Repository backends for linkhop.

pub mod memory;
pub mod mysql;

pub use linkhop_core::repository::{ReadRepository, Repository, Result};
pub use linkhop_core::StorageError;
pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;

/// DDL for the `short_links` table used by [`MySqlRepository`].
pub const MYSQL_SCHEMA: &str = include_str!("../ddl/mysql/short_links.sql");
