//! Page components for route-based navigation.

mod add_job;
mod admin_dashboard;
mod admin_login;
mod apply;
mod candidates;
mod home;

pub use add_job::AddJobPage;
pub use admin_dashboard::AdminDashboardPage;
pub use admin_login::AdminLoginPage;
pub use apply::ApplyPage;
pub use candidates::CandidatesPage;
pub use home::HomePage;
