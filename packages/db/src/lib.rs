//! SurrealDB storage for the job portal.
//!
//! This crate provides the database connection, schema, repositories and
//! seeding for postings, candidates, form options and dashboard data, plus
//! [`SurrealSource`], the database-backed `PortalSource`.
//!
//! # Features
//!
//! - `memory` (default): In-memory storage; contents are rebuilt from the seed on start
//! - `rocksdb`: Use RocksDB for file-based storage

mod connection;
mod schema;
mod seed;
mod source;
pub mod repositories;

pub use connection::{Database, DbConfig, DbError, get_db, init_db};
pub use schema::init_schema;
pub use seed::{BUILTIN_SEED, builtin_seed, is_empty, load_seed, seed_if_empty};
pub use source::SurrealSource;

/// Connect to the database and make sure the schema exists.
///
/// This should be called once at application startup.
pub async fn init(config: DbConfig) -> Result<(), DbError> {
    init_db(config).await?;
    init_schema().await?;
    Ok(())
}
