//! Database-backed [`PortalSource`].

use portal_core::{
    CandidateApplication, DashboardSnapshot, FormOptions, JobId, JobPosting, PortalSource,
};

use crate::DbError;
use crate::repositories::{
    CandidateRepository, DashboardRepository, OptionsRepository, PostingRepository,
};

/// Reads and publishes through the process-wide SurrealDB connection.
#[derive(Debug, Clone, Copy)]
pub struct SurrealSource {
    recent_limit: usize,
}

impl SurrealSource {
    /// `recent_limit` caps both recent-activity lists on the dashboard.
    pub fn new(recent_limit: usize) -> Self {
        Self { recent_limit }
    }
}

impl Default for SurrealSource {
    fn default() -> Self {
        Self::new(3)
    }
}

impl PortalSource for SurrealSource {
    type Error = DbError;

    async fn list_jobs(&self) -> Result<Vec<JobPosting>, DbError> {
        PostingRepository::list().await
    }

    async fn find_job(&self, id: &JobId) -> Result<Option<JobPosting>, DbError> {
        PostingRepository::find(id).await
    }

    async fn list_candidates(&self) -> Result<Vec<CandidateApplication>, DbError> {
        CandidateRepository::list().await
    }

    async fn form_options(&self) -> Result<FormOptions, DbError> {
        OptionsRepository::get().await
    }

    async fn dashboard(&self) -> Result<DashboardSnapshot, DbError> {
        Ok(DashboardSnapshot {
            stats: DashboardRepository::stats().await?,
            recent_jobs: DashboardRepository::recent_jobs(self.recent_limit).await?,
            recent_applications: DashboardRepository::recent_applications(self.recent_limit)
                .await?,
        })
    }

    async fn publish_job(&self, posting: JobPosting) -> Result<JobPosting, DbError> {
        let created = PostingRepository::publish(&posting).await?;

        tracing::info!(job_id = %created.id, title = %created.title, "Job posting published");

        Ok(created)
    }
}
