//! Candidate application server functions.

use dioxus::prelude::*;
use portal_core::CandidateApplication;
#[cfg(feature = "server")]
use portal_core::PortalSource;

/// List all candidate applications in listing order.
#[get("/api/candidates")]
pub async fn list_candidates() -> Result<Vec<CandidateApplication>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let source = crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        source
            .list_candidates()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to list candidates: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
