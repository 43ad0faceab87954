//! Dashboard counters and recent-activity lists.

use portal_core::{
    ApplicationStatus, DashboardStats, JobId, PostingStatus, RecentApplication, RecentPosting,
};
use serde::{Deserialize, Serialize};

use crate::{DbError, get_db};

/// Repository for the admin dashboard data.
pub struct DashboardRepository;

pub(crate) const STATS_KEY: &str = "current";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RecentPostingRow {
    posting_id: String,
    seq: i64,
    title: String,
    department: String,
    status: PostingStatus,
    applications: u32,
    posted_date: String,
}

impl RecentPostingRow {
    pub(crate) fn new(posting: &RecentPosting, seq: i64) -> Self {
        Self {
            posting_id: posting.id.0.clone(),
            seq,
            title: posting.title.clone(),
            department: posting.department.clone(),
            status: posting.status,
            applications: posting.applications,
            posted_date: posting.posted_date.clone(),
        }
    }

    fn into_recent(self) -> RecentPosting {
        RecentPosting {
            id: JobId(self.posting_id),
            title: self.title,
            department: self.department,
            status: self.status,
            applications: self.applications,
            posted_date: self.posted_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecentApplicationRow {
    application_id: String,
    seq: i64,
    candidate_name: String,
    employee_id: String,
    position: String,
    applied_date: String,
    status: ApplicationStatus,
}

impl RecentApplicationRow {
    fn into_recent(self) -> RecentApplication {
        RecentApplication {
            id: self.application_id,
            candidate_name: self.candidate_name,
            employee_id: self.employee_id,
            position: self.position,
            applied_date: self.applied_date,
            status: self.status,
        }
    }
}

impl DashboardRepository {
    /// Current counters; zeroes when never set.
    pub async fn stats() -> Result<DashboardStats, DbError> {
        let db = get_db()?;

        let record: Option<DashboardStats> = db.select(("dashboard_stats", STATS_KEY)).await?;

        Ok(record.unwrap_or_default())
    }

    /// Replace the counters.
    pub async fn set_stats(stats: &DashboardStats) -> Result<DashboardStats, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("UPSERT type::thing('dashboard_stats', $key) CONTENT $stats RETURN AFTER")
            .bind(("key", STATS_KEY))
            .bind(("stats", *stats))
            .await?;

        let records: Vec<DashboardStats> = result.take(0)?;

        records
            .into_iter()
            .next()
            .ok_or_else(|| DbError::Query("Failed to store dashboard stats".into()))
    }

    /// The first `limit` recent postings, newest first.
    pub async fn recent_jobs(limit: usize) -> Result<Vec<RecentPosting>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM recent_posting ORDER BY seq ASC LIMIT $limit")
            .bind(("limit", limit as i64))
            .await?;

        let rows: Vec<RecentPostingRow> = result.take(0)?;

        Ok(rows.into_iter().map(RecentPostingRow::into_recent).collect())
    }

    /// Add a posting after the existing recent postings.
    pub async fn append_recent_job(posting: &RecentPosting) -> Result<(), DbError> {
        let db = get_db()?;

        let seq = Self::last_seq("recent_posting").await?.map_or(0, |s| s + 1);
        let row = RecentPostingRow::new(posting, seq);

        let _: Option<RecentPostingRow> = db.create("recent_posting").content(row).await?;

        Ok(())
    }

    /// The first `limit` recent applications.
    pub async fn recent_applications(limit: usize) -> Result<Vec<RecentApplication>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM recent_application ORDER BY seq ASC LIMIT $limit")
            .bind(("limit", limit as i64))
            .await?;

        let rows: Vec<RecentApplicationRow> = result.take(0)?;

        Ok(rows
            .into_iter()
            .map(RecentApplicationRow::into_recent)
            .collect())
    }

    /// Add an application after the existing recent applications.
    pub async fn append_recent_application(application: &RecentApplication) -> Result<(), DbError> {
        let db = get_db()?;

        let seq = Self::last_seq("recent_application")
            .await?
            .map_or(0, |s| s + 1);

        let row = RecentApplicationRow {
            application_id: application.id.clone(),
            seq,
            candidate_name: application.candidate_name.clone(),
            employee_id: application.employee_id.clone(),
            position: application.position.clone(),
            applied_date: application.applied_date.clone(),
            status: application.status,
        };

        let _: Option<RecentApplicationRow> = db.create("recent_application").content(row).await?;

        Ok(())
    }

    async fn last_seq(table: &'static str) -> Result<Option<i64>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query(format!("SELECT seq FROM {table} ORDER BY seq DESC LIMIT 1"))
            .await?;

        #[derive(Deserialize)]
        struct SeqResult {
            seq: i64,
        }

        let seqs: Vec<SeqResult> = result.take(0)?;

        Ok(seqs.first().map(|s| s.seq))
    }
}
