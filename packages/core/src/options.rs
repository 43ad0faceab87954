//! Reference option lists for the job-creation form.

use serde::{Deserialize, Serialize};

/// Option enumerations offered by the add-job form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub locations: Vec<String>,
    pub designations: Vec<String>,
    pub departments: Vec<String>,
}

impl FormOptions {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}
