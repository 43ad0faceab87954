//! Seed document format for portal data.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CandidateApplication, DashboardSnapshot, FormOptions, JobPosting};

/// Seed loading errors.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Initial contents of a portal data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub jobs: Vec<JobPosting>,
    pub candidates: Vec<CandidateApplication>,
    pub options: FormOptions,
    pub dashboard: DashboardSnapshot,
}

impl Seed {
    /// Parse a seed from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a seed file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}
