//! Apply page - entry point for an application to one posting.

use dioxus::prelude::*;

use crate::{EmploymentBadge, Header};

/// Shows the posting named by the `jobId` query parameter.
#[component]
pub fn ApplyPage(job_id: Option<String>) -> Element {
    let requested = job_id.clone();
    let job_resource = use_resource(use_reactive!(|(requested,)| async move {
        match requested {
            Some(id) => api::get_job(id).await,
            None => Ok(None),
        }
    }));

    let body = match &*job_resource.read() {
        None => rsx! {
            div { class: "loading", "Loading position..." }
        },
        Some(Err(e)) => rsx! {
            div { class: "error-banner",
                span { "Failed to load job: {e}" }
            }
        },
        Some(Ok(None)) => rsx! {
            div { class: "card empty-state",
                if let Some(id) = job_id.as_ref() {
                    p { "No open position with ID {id}." }
                } else {
                    p { "Pick a position to apply for." }
                }
                Link { to: "/", class: "btn btn-primary", "Browse Job Openings" }
            }
        },
        Some(Ok(Some(job))) => {
            let job = job.clone();
            rsx! {
                div { class: "card",
                    div { class: "card-header job-card-header",
                        div {
                            h2 { class: "card-title", "{job.title}" }
                            p { class: "muted", "{job.department} • {job.location}" }
                        }
                        EmploymentBadge { kind: job.employment_type }
                    }
                    div { class: "card-body",
                        div { class: "job-meta", "Experience: {job.experience}" }
                        div { class: "job-meta", "Salary: {job.salary}" }
                        div { class: "job-meta", "Posted {job.posted_date}" }
                        if let Some(description) = job.description.as_ref() {
                            p { class: "job-description", "{description}" }
                        }
                        div { class: "skill-list",
                            for skill in job.skills.iter() {
                                span { class: "skill-tag", "{skill}" }
                            }
                        }
                    }
                    div { class: "card-footer",
                        Link { to: "/", class: "btn btn-outline", "Back to Openings" }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page",
            Header {}

            div { class: "container page-container narrow",
                div { class: "page-header",
                    h1 { class: "page-title", "Apply for Position" }
                }
                {body}
            }
        }
    }
}
