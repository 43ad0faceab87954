//! Loading seed documents into the database.

use portal_core::Seed;

use crate::{DbError, get_db};
use crate::repositories::{
    CandidateRepository, DashboardRepository, OptionsRepository, PostingRepository,
};

/// Seed document compiled into the binary.
pub const BUILTIN_SEED: &str = include_str!("../seed/portal.json");

/// Parse [`BUILTIN_SEED`].
pub fn builtin_seed() -> Result<Seed, DbError> {
    Ok(Seed::from_json(BUILTIN_SEED)?)
}

/// Tables written by [`load_seed`].
const SEEDED_TABLES: [&str; 6] = [
    "job_posting",
    "candidate",
    "form_options",
    "dashboard_stats",
    "recent_posting",
    "recent_application",
];

/// Whether none of the seeded tables holds a record.
pub async fn is_empty() -> Result<bool, DbError> {
    let db = get_db()?;

    let checks: Vec<String> = SEEDED_TABLES
        .iter()
        .map(|table| format!("array::len((SELECT id FROM {table} LIMIT 1))"))
        .collect();

    let mut result = db
        .query(format!("RETURN {};", checks.join(" + ")))
        .await?;

    let stored: Option<i64> = result.take(0)?;

    Ok(stored.unwrap_or(0) == 0)
}

/// Write every record of `seed`, keeping the order of each list.
pub async fn load_seed(seed: &Seed) -> Result<(), DbError> {
    for posting in &seed.jobs {
        PostingRepository::create(posting).await?;
    }

    for (seq, candidate) in seed.candidates.iter().enumerate() {
        CandidateRepository::create(candidate, seq as i64).await?;
    }

    OptionsRepository::set(&seed.options).await?;
    DashboardRepository::set_stats(&seed.dashboard.stats).await?;

    for posting in &seed.dashboard.recent_jobs {
        DashboardRepository::append_recent_job(posting).await?;
    }

    for application in &seed.dashboard.recent_applications {
        DashboardRepository::append_recent_application(application).await?;
    }

    tracing::info!(
        jobs = seed.jobs.len(),
        candidates = seed.candidates.len(),
        "Seed data loaded"
    );

    Ok(())
}

/// Load `seed` unless the database already holds portal data.
///
/// Returns whether the seed was loaded.
pub async fn seed_if_empty(seed: &Seed) -> Result<bool, DbError> {
    if !is_empty().await? {
        tracing::debug!("Database already populated, skipping seed");
        return Ok(false);
    }

    load_seed(seed).await?;
    Ok(true)
}
