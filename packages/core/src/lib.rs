//! Core domain types for the internal job portal.
//!
//! This crate contains shared types used across all packages:
//! - JobPosting and CandidateApplication records
//! - Dashboard snapshot and reference form options
//! - Search filtering, multi-select toggling and form validation
//! - The `PortalSource` data-source abstraction and its in-memory implementation

mod candidate;
mod dashboard;
mod form;
mod options;
mod posting;
mod schedule;
mod search;
mod seed;
mod selection;
mod source;

pub use candidate::{ApplicationStatus, CandidateApplication, CandidateId, StatusCounts};
pub use dashboard::{DashboardSnapshot, DashboardStats, PostingStatus, RecentApplication, RecentPosting};
pub use form::{DASHBOARD_PATH, FormField, JobFormState, RequiredField, SubmissionPhase, ValidationError};
pub use options::FormOptions;
pub use posting::{EmploymentType, JobId, JobPosting, ListingSummary};
pub use schedule::{Clock, ManualClock, REDIRECT_DELAY, ScheduledNavigation, SystemClock};
pub use search::{Searchable, filter_records, matches_query};
pub use seed::{Seed, SeedError};
pub use selection::SelectionSet;
pub use source::{MemorySource, MemorySourceError, PortalSource, PublishError, publish_form};
