//! Job card component for the listing grid.

use dioxus::prelude::*;
use portal_core::{JobId, JobPosting};

use crate::EmploymentBadge;

/// Skills shown before collapsing the rest into "+N more".
const SKILL_PREVIEW: usize = 3;

/// Props for JobCard component.
#[derive(Props, Clone, PartialEq)]
pub struct JobCardProps {
    /// The posting to display.
    pub job: JobPosting,
    /// Callback when "Apply for Position" is clicked.
    pub on_apply: EventHandler<JobId>,
}

/// Card showing one job posting.
#[component]
pub fn JobCard(props: JobCardProps) -> Element {
    let job = props.job.clone();
    let (shown, hidden) = job.skill_preview(SKILL_PREVIEW);
    let shown = shown.to_vec();
    let job_id = job.id.clone();

    rsx! {
        div { class: "card job-card",
            div { class: "card-header job-card-header",
                div {
                    h3 { class: "card-title", "{job.title}" }
                    p { class: "muted", "{job.department}" }
                }
                EmploymentBadge { kind: job.employment_type }
            }

            div { class: "card-body",
                div { class: "job-meta", "📍 {job.location}" }
                div { class: "job-meta", "📅 Posted {job.posted_date}" }
                div { class: "job-meta", "💰 {job.salary}" }
                div { class: "job-meta", "👥 {job.applicants} applicants" }

                div { class: "skill-list",
                    for skill in shown {
                        span { class: "skill-tag", "{skill}" }
                    }
                    if hidden > 0 {
                        span { class: "skill-tag", "+{hidden} more" }
                    }
                }
            }

            div { class: "card-footer",
                button {
                    class: "btn btn-primary btn-block",
                    onclick: move |_| props.on_apply.call(job_id.clone()),
                    "Apply for Position"
                }
            }
        }
    }
}
