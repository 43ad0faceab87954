//! Database schema definitions using SurrealQL.

use crate::{DbError, get_db};

/// Define every table, field and index the portal uses.
pub async fn init_schema() -> Result<(), DbError> {
    let db = get_db()?;

    tracing::info!("Initializing database schema...");

    db.query(POSTING_SCHEMA).await?;
    db.query(CANDIDATE_SCHEMA).await?;
    db.query(DASHBOARD_SCHEMA).await?;
    db.query(OPTIONS_SCHEMA).await?;

    tracing::info!("Database schema initialized");

    Ok(())
}

/// Job postings, ordered by `seq`.
const POSTING_SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS job_posting SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS posting_id ON job_posting TYPE string;
DEFINE FIELD IF NOT EXISTS seq ON job_posting TYPE int;
DEFINE FIELD IF NOT EXISTS title ON job_posting TYPE string;
DEFINE FIELD IF NOT EXISTS department ON job_posting TYPE string;
DEFINE FIELD IF NOT EXISTS location ON job_posting TYPE string;
DEFINE FIELD IF NOT EXISTS experience ON job_posting TYPE string;
DEFINE FIELD IF NOT EXISTS salary ON job_posting TYPE string;
DEFINE FIELD IF NOT EXISTS posted_date ON job_posting TYPE string;
DEFINE FIELD IF NOT EXISTS applicants ON job_posting TYPE int DEFAULT 0;
DEFINE FIELD IF NOT EXISTS skills ON job_posting TYPE array<string> DEFAULT [];
DEFINE FIELD IF NOT EXISTS employment_type ON job_posting TYPE string DEFAULT "full_time";
DEFINE FIELD IF NOT EXISTS description ON job_posting TYPE option<string>;
DEFINE FIELD IF NOT EXISTS designation ON job_posting TYPE option<string>;
DEFINE FIELD IF NOT EXISTS languages ON job_posting TYPE array<string> DEFAULT [];

DEFINE INDEX IF NOT EXISTS job_posting_seq ON job_posting FIELDS seq;
DEFINE INDEX IF NOT EXISTS job_posting_id ON job_posting FIELDS posting_id UNIQUE;
"#;

/// Candidate applications, ordered by `seq`.
const CANDIDATE_SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS candidate SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS candidate_id ON candidate TYPE string;
DEFINE FIELD IF NOT EXISTS seq ON candidate TYPE int;
DEFINE FIELD IF NOT EXISTS name ON candidate TYPE string;
DEFINE FIELD IF NOT EXISTS employee_id ON candidate TYPE string;
DEFINE FIELD IF NOT EXISTS email ON candidate TYPE string;
DEFINE FIELD IF NOT EXISTS phone ON candidate TYPE string;
DEFINE FIELD IF NOT EXISTS current_role ON candidate TYPE string;
DEFINE FIELD IF NOT EXISTS current_department ON candidate TYPE string;
DEFINE FIELD IF NOT EXISTS experience ON candidate TYPE string;
DEFINE FIELD IF NOT EXISTS location ON candidate TYPE string;
DEFINE FIELD IF NOT EXISTS skills ON candidate TYPE array<string> DEFAULT [];
DEFINE FIELD IF NOT EXISTS applied_for ON candidate TYPE string;
DEFINE FIELD IF NOT EXISTS application_date ON candidate TYPE string;
DEFINE FIELD IF NOT EXISTS status ON candidate TYPE string DEFAULT "under_review";

DEFINE INDEX IF NOT EXISTS candidate_seq ON candidate FIELDS seq;
DEFINE INDEX IF NOT EXISTS candidate_status ON candidate FIELDS status;
"#;

/// Dashboard counters (single record) and the two recent-activity lists.
const DASHBOARD_SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS dashboard_stats SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS total_jobs ON dashboard_stats TYPE int DEFAULT 0;
DEFINE FIELD IF NOT EXISTS active_jobs ON dashboard_stats TYPE int DEFAULT 0;
DEFINE FIELD IF NOT EXISTS total_applications ON dashboard_stats TYPE int DEFAULT 0;
DEFINE FIELD IF NOT EXISTS pending_reviews ON dashboard_stats TYPE int DEFAULT 0;

DEFINE TABLE IF NOT EXISTS recent_posting SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS posting_id ON recent_posting TYPE string;
DEFINE FIELD IF NOT EXISTS seq ON recent_posting TYPE int;
DEFINE FIELD IF NOT EXISTS title ON recent_posting TYPE string;
DEFINE FIELD IF NOT EXISTS department ON recent_posting TYPE string;
DEFINE FIELD IF NOT EXISTS status ON recent_posting TYPE string DEFAULT "active";
DEFINE FIELD IF NOT EXISTS applications ON recent_posting TYPE int DEFAULT 0;
DEFINE FIELD IF NOT EXISTS posted_date ON recent_posting TYPE string;

DEFINE INDEX IF NOT EXISTS recent_posting_seq ON recent_posting FIELDS seq;

DEFINE TABLE IF NOT EXISTS recent_application SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS application_id ON recent_application TYPE string;
DEFINE FIELD IF NOT EXISTS seq ON recent_application TYPE int;
DEFINE FIELD IF NOT EXISTS candidate_name ON recent_application TYPE string;
DEFINE FIELD IF NOT EXISTS employee_id ON recent_application TYPE string;
DEFINE FIELD IF NOT EXISTS position ON recent_application TYPE string;
DEFINE FIELD IF NOT EXISTS applied_date ON recent_application TYPE string;
DEFINE FIELD IF NOT EXISTS status ON recent_application TYPE string DEFAULT "under_review";

DEFINE INDEX IF NOT EXISTS recent_application_seq ON recent_application FIELDS seq;
"#;

/// Reference option lists for the add-job form (single record).
const OPTIONS_SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS form_options SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS skills ON form_options TYPE array<string> DEFAULT [];
DEFINE FIELD IF NOT EXISTS languages ON form_options TYPE array<string> DEFAULT [];
DEFINE FIELD IF NOT EXISTS locations ON form_options TYPE array<string> DEFAULT [];
DEFINE FIELD IF NOT EXISTS designations ON form_options TYPE array<string> DEFAULT [];
DEFINE FIELD IF NOT EXISTS departments ON form_options TYPE array<string> DEFAULT [];
"#;
