//! Job posting domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a job posting.
///
/// Seed postings use short numeric strings; postings created through the
/// admin form use `JOB-<unix millis>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Generate a form identifier from the given instant.
    pub fn generate(at: DateTime<Utc>) -> Self {
        Self(format!("JOB-{}", at.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employment type of a posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 3] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
    ];

    /// Stable key used in form values and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::PartTime => "part_time",
            EmploymentType::Contract => "contract",
        }
    }

    /// Parse a form value. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "full_time" => Some(EmploymentType::FullTime),
            "part_time" => Some(EmploymentType::PartTime),
            "contract" => Some(EmploymentType::Contract),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An open position listed on the portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub department: String,
    pub location: String,
    /// Experience range as displayed, e.g. "3-5 years".
    pub experience: String,
    /// Salary range as displayed, e.g. "₹8-12 LPA".
    pub salary: String,
    /// Posting date as displayed.
    pub posted_date: String,
    pub applicants: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub employment_type: EmploymentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
}

impl JobPosting {
    /// The first `limit` skills plus how many were left out.
    pub fn skill_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.skills.len().min(limit);
        (&self.skills[..shown], self.skills.len() - shown)
    }
}

/// Headline counters shown above the job listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub open_positions: usize,
    pub total_applicants: u64,
}

impl ListingSummary {
    pub fn from_postings(postings: &[JobPosting]) -> Self {
        Self {
            open_positions: postings.len(),
            total_applicants: postings.iter().map(|p| u64::from(p.applicants)).sum(),
        }
    }
}
