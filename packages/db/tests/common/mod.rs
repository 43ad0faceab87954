#![allow(dead_code)]

use std::sync::LazyLock;

use tokio::sync::{Mutex, MutexGuard};

use db::{DbConfig, DbError};
use portal_core::{EmploymentType, JobId, JobPosting};

static TEST_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub const RESET_QUERY: &str = "DELETE job_posting; DELETE candidate; DELETE dashboard_stats; \
     DELETE recent_posting; DELETE recent_application; DELETE form_options;";

pub async fn setup_db() -> Result<MutexGuard<'static, ()>, DbError> {
    let guard = TEST_LOCK.lock().await;
    db::init(DbConfig::memory()).await?;
    reset_db().await?;
    Ok(guard)
}

pub async fn reset_db() -> Result<(), DbError> {
    let db_conn = db::get_db()?;
    db_conn.query(RESET_QUERY).await?;
    Ok(())
}

pub fn posting(id: &str, title: &str) -> JobPosting {
    JobPosting {
        id: JobId::from(id),
        title: title.to_string(),
        department: "Technology".to_string(),
        location: "Chennai, India".to_string(),
        experience: "2-6 years".to_string(),
        salary: "₹10-14 LPA".to_string(),
        posted_date: "2024-02-01".to_string(),
        applicants: 0,
        skills: vec!["Python".to_string(), "AWS".to_string()],
        employment_type: EmploymentType::Contract,
        description: Some("Build data pipelines".to_string()),
        designation: Some("Data Analyst".to_string()),
        languages: vec!["English".to_string()],
    }
}
