//! Admin dashboard and add-job form data.

use dioxus::prelude::*;
use portal_core::{DashboardSnapshot, FormOptions};
#[cfg(feature = "server")]
use portal_core::PortalSource;

/// Counters plus the recent postings and applications.
#[get("/api/dashboard")]
pub async fn dashboard() -> Result<DashboardSnapshot, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let source = crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        source
            .dashboard()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load dashboard: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Option lists offered by the add-job form.
#[get("/api/options")]
pub async fn form_options() -> Result<FormOptions, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let source = crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        source
            .form_options()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load form options: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
