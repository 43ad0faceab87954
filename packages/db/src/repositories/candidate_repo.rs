//! Candidate application repository.

use portal_core::{ApplicationStatus, CandidateApplication, CandidateId};
use serde::{Deserialize, Serialize};

use crate::{DbError, get_db};

/// Repository for candidate applications.
pub struct CandidateRepository;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CandidateRow {
    candidate_id: String,
    seq: i64,
    name: String,
    employee_id: String,
    email: String,
    phone: String,
    current_role: String,
    current_department: String,
    experience: String,
    location: String,
    skills: Vec<String>,
    applied_for: String,
    application_date: String,
    status: ApplicationStatus,
}

impl CandidateRow {
    fn new(candidate: &CandidateApplication, seq: i64) -> Self {
        Self {
            candidate_id: candidate.id.0.clone(),
            seq,
            name: candidate.name.clone(),
            employee_id: candidate.employee_id.clone(),
            email: candidate.email.clone(),
            phone: candidate.phone.clone(),
            current_role: candidate.current_role.clone(),
            current_department: candidate.current_department.clone(),
            experience: candidate.experience.clone(),
            location: candidate.location.clone(),
            skills: candidate.skills.clone(),
            applied_for: candidate.applied_for.clone(),
            application_date: candidate.application_date.clone(),
            status: candidate.status,
        }
    }

    fn into_candidate(self) -> CandidateApplication {
        CandidateApplication {
            id: CandidateId(self.candidate_id),
            name: self.name,
            employee_id: self.employee_id,
            email: self.email,
            phone: self.phone,
            current_role: self.current_role,
            current_department: self.current_department,
            experience: self.experience,
            location: self.location,
            skills: self.skills,
            applied_for: self.applied_for,
            application_date: self.application_date,
            status: self.status,
        }
    }
}

impl CandidateRepository {
    /// Store a candidate at position `seq` of the listing.
    pub async fn create(
        candidate: &CandidateApplication,
        seq: i64,
    ) -> Result<CandidateApplication, DbError> {
        let db = get_db()?;

        let record: Option<CandidateRow> = db
            .create(("candidate", candidate.id.0.clone()))
            .content(CandidateRow::new(candidate, seq))
            .await?;

        record
            .map(CandidateRow::into_candidate)
            .ok_or_else(|| DbError::Query("Failed to create candidate".into()))
    }

    /// Get a candidate by id.
    pub async fn get(id: &CandidateId) -> Result<CandidateApplication, DbError> {
        let db = get_db()?;

        let record: Option<CandidateRow> = db.select(("candidate", id.0.clone())).await?;

        record
            .map(CandidateRow::into_candidate)
            .ok_or_else(|| DbError::NotFound(format!("Candidate not found: {}", id)))
    }

    /// All candidates in listing order.
    pub async fn list() -> Result<Vec<CandidateApplication>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM candidate ORDER BY seq ASC")
            .await?;

        let rows: Vec<CandidateRow> = result.take(0)?;

        Ok(rows.into_iter().map(CandidateRow::into_candidate).collect())
    }

    /// Candidates with the given status, in listing order.
    pub async fn list_by_status(
        status: ApplicationStatus,
    ) -> Result<Vec<CandidateApplication>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM candidate WHERE status = $status ORDER BY seq ASC")
            .bind(("status", status.as_str().to_string()))
            .await?;

        let rows: Vec<CandidateRow> = result.take(0)?;

        Ok(rows.into_iter().map(CandidateRow::into_candidate).collect())
    }
}
