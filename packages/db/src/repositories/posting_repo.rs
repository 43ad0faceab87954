//! Job posting repository.

use portal_core::{EmploymentType, JobId, JobPosting, RecentPosting};
use serde::{Deserialize, Serialize};

use super::dashboard_repo::{RecentPostingRow, STATS_KEY};
use crate::{DbError, get_db};

/// Repository for job postings.
pub struct PostingRepository;

/// Stored shape of a posting. The SurrealDB record id is ignored on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PostingRow {
    posting_id: String,
    seq: i64,
    title: String,
    department: String,
    location: String,
    experience: String,
    salary: String,
    posted_date: String,
    applicants: u32,
    skills: Vec<String>,
    employment_type: EmploymentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    designation: Option<String>,
    #[serde(default)]
    languages: Vec<String>,
}

impl PostingRow {
    fn new(posting: &JobPosting, seq: i64) -> Self {
        Self {
            posting_id: posting.id.0.clone(),
            seq,
            title: posting.title.clone(),
            department: posting.department.clone(),
            location: posting.location.clone(),
            experience: posting.experience.clone(),
            salary: posting.salary.clone(),
            posted_date: posting.posted_date.clone(),
            applicants: posting.applicants,
            skills: posting.skills.clone(),
            employment_type: posting.employment_type,
            description: posting.description.clone(),
            designation: posting.designation.clone(),
            languages: posting.languages.clone(),
        }
    }

    fn into_posting(self) -> JobPosting {
        JobPosting {
            id: JobId(self.posting_id),
            title: self.title,
            department: self.department,
            location: self.location,
            experience: self.experience,
            salary: self.salary,
            posted_date: self.posted_date,
            applicants: self.applicants,
            skills: self.skills,
            employment_type: self.employment_type,
            description: self.description,
            designation: self.designation,
            languages: self.languages,
        }
    }
}

/// Appends the posting after the current last one.
const INSERT_POSTING: &str = "
    LET $last = (SELECT seq FROM job_posting ORDER BY seq DESC LIMIT 1)[0].seq;
    CREATE type::thing('job_posting', $id) CONTENT $row;
    UPDATE type::thing('job_posting', $id) SET seq = ($last ?? -1) + 1;
";

/// Puts the posting in front of the recent list and counts it as total and active.
const ANNOUNCE_POSTING: &str = "
    LET $first = (SELECT seq FROM recent_posting ORDER BY seq ASC LIMIT 1)[0].seq;
    LET $recent_id = (CREATE recent_posting CONTENT $recent)[0].id;
    UPDATE $recent_id SET seq = ($first ?? 1) - 1;
    UPSERT type::thing('dashboard_stats', $stats_key) SET total_jobs += 1, active_jobs += 1;
";

impl PostingRepository {
    /// Append a posting to the end of the listing.
    pub async fn create(posting: &JobPosting) -> Result<JobPosting, DbError> {
        Self::ensure_new(&posting.id).await?;

        let db = get_db()?;

        db.query(format!(
            "BEGIN TRANSACTION; {INSERT_POSTING} COMMIT TRANSACTION;"
        ))
        .bind(("id", posting.id.0.clone()))
        .bind(("row", PostingRow::new(posting, 0)))
        .await?
        .check()?;

        Self::get(&posting.id).await
    }

    /// Append a posting to the listing, add it to the front of the recent
    /// postings and bump the dashboard counters, all in one transaction.
    pub async fn publish(posting: &JobPosting) -> Result<JobPosting, DbError> {
        Self::ensure_new(&posting.id).await?;

        let db = get_db()?;

        db.query(format!(
            "BEGIN TRANSACTION; {INSERT_POSTING} {ANNOUNCE_POSTING} COMMIT TRANSACTION;"
        ))
        .bind(("id", posting.id.0.clone()))
        .bind(("row", PostingRow::new(posting, 0)))
        .bind(("recent", RecentPostingRow::new(&RecentPosting::from(posting), 0)))
        .bind(("stats_key", STATS_KEY))
        .await?
        .check()?;

        Self::get(&posting.id).await
    }

    /// Get a posting by id.
    pub async fn get(id: &JobId) -> Result<JobPosting, DbError> {
        Self::find(id)
            .await?
            .ok_or_else(|| DbError::NotFound(format!("Job posting not found: {}", id)))
    }

    /// Look a posting up by id.
    pub async fn find(id: &JobId) -> Result<Option<JobPosting>, DbError> {
        let db = get_db()?;

        let record: Option<PostingRow> = db.select(("job_posting", id.0.clone())).await?;

        Ok(record.map(PostingRow::into_posting))
    }

    /// All postings in listing order.
    pub async fn list() -> Result<Vec<JobPosting>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM job_posting ORDER BY seq ASC")
            .await?;

        let rows: Vec<PostingRow> = result.take(0)?;

        Ok(rows.into_iter().map(PostingRow::into_posting).collect())
    }

    pub async fn exists(id: &JobId) -> Result<bool, DbError> {
        Ok(Self::find(id).await?.is_some())
    }

    pub async fn count() -> Result<usize, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT count() FROM job_posting GROUP ALL")
            .await?;

        #[derive(Deserialize)]
        struct CountResult {
            count: i64,
        }

        let counts: Vec<CountResult> = result.take(0)?;

        Ok(counts.first().map_or(0, |c| c.count as usize))
    }

    async fn ensure_new(id: &JobId) -> Result<(), DbError> {
        if Self::exists(id).await? {
            return Err(DbError::Conflict(format!("Job posting {}", id)));
        }
        Ok(())
    }
}
