//! Data-source abstraction for listings, options and dashboard data.

use std::future::Future;
use std::sync::RwLock;

use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    CandidateApplication, DashboardSnapshot, FormOptions, JobFormState, JobId, JobPosting,
    RecentPosting, Seed, ValidationError,
};

/// Where the portal reads its listings from and publishes new postings to.
pub trait PortalSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// All postings in listing order.
    fn list_jobs(&self) -> impl Future<Output = Result<Vec<JobPosting>, Self::Error>> + Send;

    fn find_job(
        &self,
        id: &JobId,
    ) -> impl Future<Output = Result<Option<JobPosting>, Self::Error>> + Send;

    /// All candidate applications in listing order.
    fn list_candidates(
        &self,
    ) -> impl Future<Output = Result<Vec<CandidateApplication>, Self::Error>> + Send;

    fn form_options(&self) -> impl Future<Output = Result<FormOptions, Self::Error>> + Send;

    fn dashboard(&self) -> impl Future<Output = Result<DashboardSnapshot, Self::Error>> + Send;

    /// Append a posting to the listing and surface it on the dashboard.
    fn publish_job(
        &self,
        posting: JobPosting,
    ) -> impl Future<Output = Result<JobPosting, Self::Error>> + Send;
}

/// Why a submitted form was not published.
#[derive(Debug, Error)]
pub enum PublishError<E> {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Data source error: {0}")]
    Source(E),
}

/// Check `form` against the source's current options and publish the posting
/// it describes, dated `posted_on`.
pub async fn publish_form<S: PortalSource>(
    source: &S,
    form: &JobFormState,
    posted_on: NaiveDate,
) -> Result<JobPosting, PublishError<S::Error>> {
    let options = source.form_options().await.map_err(PublishError::Source)?;
    let posting = form.to_posting(&options, posted_on)?;

    source
        .publish_job(posting)
        .await
        .map_err(PublishError::Source)
}

/// Errors from [`MemorySource`].
#[derive(Debug, Error)]
pub enum MemorySourceError {
    #[error("Job already exists: {0}")]
    DuplicateJob(JobId),
}

/// A [`PortalSource`] kept entirely in process memory.
#[derive(Debug)]
pub struct MemorySource {
    data: RwLock<Seed>,
    recent_limit: usize,
}

impl MemorySource {
    pub fn new(seed: Seed, recent_limit: usize) -> Self {
        Self {
            data: RwLock::new(seed),
            recent_limit,
        }
    }

    fn read<T>(&self, f: impl FnOnce(&Seed) -> T) -> T {
        let guard = self.data.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }
}

impl PortalSource for MemorySource {
    type Error = MemorySourceError;

    async fn list_jobs(&self) -> Result<Vec<JobPosting>, Self::Error> {
        Ok(self.read(|seed| seed.jobs.clone()))
    }

    async fn find_job(&self, id: &JobId) -> Result<Option<JobPosting>, Self::Error> {
        Ok(self.read(|seed| seed.jobs.iter().find(|j| &j.id == id).cloned()))
    }

    async fn list_candidates(&self) -> Result<Vec<CandidateApplication>, Self::Error> {
        Ok(self.read(|seed| seed.candidates.clone()))
    }

    async fn form_options(&self) -> Result<FormOptions, Self::Error> {
        Ok(self.read(|seed| seed.options.clone()))
    }

    async fn dashboard(&self) -> Result<DashboardSnapshot, Self::Error> {
        let mut snapshot = self.read(|seed| seed.dashboard.clone());
        snapshot.recent_jobs.truncate(self.recent_limit);
        snapshot.recent_applications.truncate(self.recent_limit);
        Ok(snapshot)
    }

    async fn publish_job(&self, posting: JobPosting) -> Result<JobPosting, Self::Error> {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        if data.jobs.iter().any(|j| j.id == posting.id) {
            return Err(MemorySourceError::DuplicateJob(posting.id));
        }

        data.jobs.push(posting.clone());
        data.dashboard
            .recent_jobs
            .insert(0, RecentPosting::from(&posting));
        data.dashboard.stats.total_jobs += 1;
        data.dashboard.stats.active_jobs += 1;

        Ok(posting)
    }
}
