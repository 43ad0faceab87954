//! Job posting server functions.

use dioxus::prelude::*;
use portal_core::{JobFormState, JobPosting};
#[cfg(feature = "server")]
use portal_core::{JobId, PortalSource, publish_form};

/// List all job postings in listing order.
#[get("/api/jobs")]
pub async fn list_jobs() -> Result<Vec<JobPosting>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let source = crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        source
            .list_jobs()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to list jobs: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Get a job posting by ID.
#[get("/api/jobs/:id")]
pub async fn get_job(id: String) -> Result<Option<JobPosting>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let source = crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        source
            .find_job(&JobId(id))
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to get job: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Publish the posting described by a submitted add-job form.
#[post("/api/jobs/create")]
pub async fn create_job(form: JobFormState) -> Result<JobPosting, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let source = crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let posting = publish_form(source, &form, chrono::Utc::now().date_naive())
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        tracing::info!(job_id = %posting.id, "Job posting created");

        Ok(posting)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
