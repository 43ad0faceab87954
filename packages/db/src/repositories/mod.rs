//! Repository implementations for database operations.

mod candidate_repo;
mod dashboard_repo;
mod options_repo;
mod posting_repo;

pub use candidate_repo::CandidateRepository;
pub use dashboard_repo::DashboardRepository;
pub use options_repo::OptionsRepository;
pub use posting_repo::PostingRepository;
