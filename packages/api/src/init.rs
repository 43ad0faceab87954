//! Server initialization for the job portal.

use db::{DbError, SurrealSource};
use portal_core::{Seed, SeedError};
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::PortalConfig;

static SOURCE: OnceCell<SurrealSource> = OnceCell::const_new();

/// Errors raised while bringing the portal up.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Database error: {0}")]
    Db(#[from] DbError),
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),
}

/// Initialize the portal once and return its data source.
///
/// The first call connects to the database, creates the schema and seeds an
/// empty store. Later calls return the same source.
pub async fn ensure_initialized() -> Result<&'static SurrealSource, InitError> {
    SOURCE.get_or_try_init(|| init(PortalConfig::from_env())).await
}

async fn init(config: PortalConfig) -> Result<SurrealSource, InitError> {
    tracing::info!("Initializing job portal...");

    db::init(config.db.clone()).await?;

    let seed = match &config.seed_path {
        Some(path) => {
            tracing::info!("Loading seed from {}", path.display());
            Seed::from_file(path)?
        }
        None => db::builtin_seed()?,
    };

    if db::seed_if_empty(&seed).await? {
        tracing::info!("Seeded {} job postings", seed.jobs.len());
    }

    tracing::info!("Job portal initialized");
    Ok(SurrealSource::new(config.recent_limit))
}
