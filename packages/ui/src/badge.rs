//! Status and type badge components.

use dioxus::prelude::*;
use portal_core::{ApplicationStatus, EmploymentType, PostingStatus};

/// Badge for a candidate application status.
#[component]
pub fn ApplicationBadge(status: ApplicationStatus) -> Element {
    let bg_class = match status {
        ApplicationStatus::UnderReview => "badge-warning",
        ApplicationStatus::Shortlisted => "badge-primary",
        ApplicationStatus::InterviewScheduled => "badge-accent",
        ApplicationStatus::Selected => "badge-success",
    };

    rsx! {
        span {
            class: "status-badge {bg_class}",
            {status.label()}
        }
    }
}

/// Badge for a posting's open/closed state.
#[component]
pub fn PostingBadge(status: PostingStatus) -> Element {
    let bg_class = match status {
        PostingStatus::Active => "badge-success",
        PostingStatus::Closed => "badge-muted",
    };

    rsx! {
        span {
            class: "status-badge {bg_class}",
            {status.label()}
        }
    }
}

#[component]
pub fn EmploymentBadge(kind: EmploymentType) -> Element {
    rsx! {
        span {
            class: "type-badge",
            {kind.label()}
        }
    }
}
