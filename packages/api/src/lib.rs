//! Server API functions for the job portal.
//!
//! This crate contains all shared fullstack server functions for:
//! - Job postings (list, get, create from the add-job form)
//! - Candidate applications
//! - Add-job form options and the admin dashboard snapshot

mod candidates;
mod dashboard;
mod jobs;

#[cfg(feature = "server")]
mod config;

#[cfg(feature = "server")]
mod init;

// Re-export all server functions
pub use candidates::*;
pub use dashboard::*;
pub use jobs::*;

#[cfg(feature = "server")]
pub use config::PortalConfig;

#[cfg(feature = "server")]
pub use init::{InitError, ensure_initialized};

// Re-export core types for convenience
pub use portal_core::{
    CandidateApplication, DashboardSnapshot, FormOptions, JobFormState, JobId, JobPosting,
};
