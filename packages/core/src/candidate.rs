//! Candidate application types.

use serde::{Deserialize, Serialize};

/// Identifier for a candidate application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review status of an application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    UnderReview,
    Shortlisted,
    InterviewScheduled,
    Selected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::InterviewScheduled => "interview_scheduled",
            ApplicationStatus::Selected => "selected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::InterviewScheduled => "Interview Scheduled",
            ApplicationStatus::Selected => "Selected",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An employee's application to an internal posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateApplication {
    pub id: CandidateId,
    pub name: String,
    /// Internal employee identifier, e.g. "CF12345".
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub current_role: String,
    pub current_department: String,
    pub experience: String,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Title of the posting applied for.
    pub applied_for: String,
    pub application_date: String,
    #[serde(default)]
    pub status: ApplicationStatus,
}

impl CandidateApplication {
    /// First letter of each word in the name, for the avatar.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// Per-status tallies for the candidates summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub under_review: usize,
    pub shortlisted: usize,
    pub interview_scheduled: usize,
    pub selected: usize,
}

impl StatusCounts {
    pub fn tally(candidates: &[CandidateApplication]) -> Self {
        let mut counts = Self {
            total: candidates.len(),
            ..Default::default()
        };
        for candidate in candidates {
            match candidate.status {
                ApplicationStatus::UnderReview => counts.under_review += 1,
                ApplicationStatus::Shortlisted => counts.shortlisted += 1,
                ApplicationStatus::InterviewScheduled => counts.interview_scheduled += 1,
                ApplicationStatus::Selected => counts.selected += 1,
            }
        }
        counts
    }
}
