//! Add-job form state, validation and submission phases.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    Clock, EmploymentType, FormOptions, JobId, JobPosting, REDIRECT_DELAY, ScheduledNavigation,
    SelectionSet,
};

/// Where a successful submission navigates to.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Fields that must be non-empty for a submission to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Title,
    Description,
    Designation,
    Location,
}

/// Form validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are empty. The message stays generic.
    #[error("Please fill in all required fields.")]
    MissingRequired(Vec<RequiredField>),
    #[error("Unknown {kind} option: {value}")]
    UnknownOption { kind: &'static str, value: String },
}

/// Scalar form fields that are edited one keystroke at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Designation,
    Location,
    Department,
    JobType,
    MinExperience,
    MaxExperience,
    MinSalary,
    MaxSalary,
}

/// Editable state of the add-job form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFormState {
    pub job_id: JobId,
    pub title: String,
    pub description: String,
    pub designation: String,
    pub location: String,
    pub min_experience: String,
    pub max_experience: String,
    pub min_salary: String,
    pub max_salary: String,
    pub department: String,
    /// Employment type key, empty until chosen.
    pub job_type: String,
    #[serde(default)]
    pub skills: SelectionSet,
    #[serde(default)]
    pub languages: SelectionSet,
}

impl JobFormState {
    /// Create an empty form with the given identifier.
    pub fn new(job_id: JobId) -> Self {
        Self {
            job_id,
            title: String::new(),
            description: String::new(),
            designation: String::new(),
            location: String::new(),
            min_experience: String::new(),
            max_experience: String::new(),
            min_salary: String::new(),
            max_salary: String::new(),
            department: String::new(),
            job_type: String::new(),
            skills: SelectionSet::new(),
            languages: SelectionSet::new(),
        }
    }

    /// Open a fresh form, deriving its identifier from the clock.
    pub fn opened_at(clock: &impl Clock) -> Self {
        Self::new(JobId::generate(clock.now()))
    }

    /// Overwrite a single scalar field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Designation => &mut self.designation,
            FormField::Location => &mut self.location,
            FormField::Department => &mut self.department,
            FormField::JobType => &mut self.job_type,
            FormField::MinExperience => &mut self.min_experience,
            FormField::MaxExperience => &mut self.max_experience,
            FormField::MinSalary => &mut self.min_salary,
            FormField::MaxSalary => &mut self.max_salary,
        };
        *slot = value;
    }

    /// Toggle a required skill. Values outside the reference list are ignored.
    ///
    /// Returns `true` when the toggle was applied.
    pub fn toggle_skill(&mut self, options: &FormOptions, skill: &str) -> bool {
        if !options.has_skill(skill) {
            return false;
        }
        self.skills.toggle(skill);
        true
    }

    /// Toggle a known language. Values outside the reference list are ignored.
    pub fn toggle_language(&mut self, options: &FormOptions, language: &str) -> bool {
        if !options.has_language(language) {
            return false;
        }
        self.languages.toggle(language);
        true
    }

    /// Required fields that are currently empty, in form order.
    ///
    /// Values are not trimmed: a single space counts as filled in.
    pub fn missing_required(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Title, &self.title),
            (RequiredField::Description, &self.description),
            (RequiredField::Designation, &self.designation),
            (RequiredField::Location, &self.location),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check the required fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequired(missing))
        }
    }

    /// Check that every selection comes from the reference lists.
    pub fn validate_selections(&self, options: &FormOptions) -> Result<(), ValidationError> {
        if let Some(skill) = self.skills.iter().find(|s| !options.has_skill(s)) {
            return Err(ValidationError::UnknownOption {
                kind: "skill",
                value: skill.to_string(),
            });
        }
        if let Some(language) = self.languages.iter().find(|l| !options.has_language(l)) {
            return Err(ValidationError::UnknownOption {
                kind: "language",
                value: language.to_string(),
            });
        }
        Ok(())
    }

    /// Build the posting this form describes.
    pub fn to_posting(
        &self,
        options: &FormOptions,
        posted_on: NaiveDate,
    ) -> Result<JobPosting, ValidationError> {
        self.validate()?;
        self.validate_selections(options)?;

        Ok(JobPosting {
            id: self.job_id.clone(),
            title: self.title.clone(),
            department: self.department.clone(),
            location: self.location.clone(),
            experience: range_label(&self.min_experience, &self.max_experience, "", " years"),
            salary: range_label(&self.min_salary, &self.max_salary, "₹", " LPA"),
            posted_date: posted_on.format("%Y-%m-%d").to_string(),
            applicants: 0,
            skills: self.skills.as_slice().to_vec(),
            employment_type: EmploymentType::parse(&self.job_type).unwrap_or_default(),
            description: Some(self.description.clone()),
            designation: Some(self.designation.clone()),
            languages: self.languages.as_slice().to_vec(),
        })
    }
}

fn range_label(min: &str, max: &str, prefix: &str, unit: &str) -> String {
    match (min.is_empty(), max.is_empty()) {
        (false, false) => format!("{prefix}{min}-{max}{unit}"),
        (false, true) => format!("{prefix}{min}+{unit}"),
        (true, false) => format!("Up to {prefix}{max}{unit}"),
        (true, true) => "Not specified".to_string(),
    }
}

/// Where the add-job form is in its submit cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    /// Submit was refused; the form keeps its contents.
    Rejected(ValidationError),
    /// Valid form handed to the server.
    Submitting,
    /// Posting stored; navigation to the dashboard is scheduled.
    Published {
        posting: JobId,
        navigation: ScheduledNavigation,
    },
}

impl SubmissionPhase {
    /// Phase reached by pressing submit on `form`.
    pub fn on_submit(form: &JobFormState) -> Self {
        match form.validate() {
            Ok(()) => SubmissionPhase::Submitting,
            Err(e) => SubmissionPhase::Rejected(e),
        }
    }

    /// Phase reached once the server stored the posting.
    pub fn on_published(posting: JobId, clock: &impl Clock) -> Self {
        SubmissionPhase::Published {
            posting,
            navigation: ScheduledNavigation::after(clock, REDIRECT_DELAY, DASHBOARD_PATH),
        }
    }

    /// Whether the submit button should be disabled.
    pub fn is_locked(&self) -> bool {
        matches!(
            self,
            SubmissionPhase::Submitting | SubmissionPhase::Published { .. }
        )
    }
}
