//! Admin dashboard snapshot types.

use serde::{Deserialize, Serialize};

use crate::{ApplicationStatus, JobId, JobPosting};

/// Headline counters on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_jobs: u32,
    pub active_jobs: u32,
    pub total_applications: u32,
    pub pending_reviews: u32,
}

/// Whether a posting is still open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingStatus {
    #[default]
    Active,
    Closed,
}

impl PostingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PostingStatus::Active => "Active",
            PostingStatus::Closed => "Closed",
        }
    }
}

/// Row in the "Recent Job Postings" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentPosting {
    pub id: JobId,
    pub title: String,
    pub department: String,
    #[serde(default)]
    pub status: PostingStatus,
    pub applications: u32,
    pub posted_date: String,
}

impl From<&JobPosting> for RecentPosting {
    fn from(posting: &JobPosting) -> Self {
        Self {
            id: posting.id.clone(),
            title: posting.title.clone(),
            department: posting.department.clone(),
            status: PostingStatus::Active,
            applications: posting.applicants,
            posted_date: posting.posted_date.clone(),
        }
    }
}

/// Row in the "Recent Applications" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentApplication {
    pub id: String,
    pub candidate_name: String,
    pub employee_id: String,
    pub position: String,
    pub applied_date: String,
    #[serde(default)]
    pub status: ApplicationStatus,
}

/// Everything the admin dashboard renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    #[serde(default)]
    pub recent_jobs: Vec<RecentPosting>,
    #[serde(default)]
    pub recent_applications: Vec<RecentApplication>,
}
