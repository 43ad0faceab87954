//! Admin dashboard page - counters and recent activity.

use dioxus::prelude::*;
use portal_core::DashboardSnapshot;

use crate::{ApplicationBadge, Header, PostingBadge};

/// HR dashboard page component.
#[component]
pub fn AdminDashboardPage() -> Element {
    let mut error = use_signal(|| None::<String>);
    let nav = use_navigator();

    let snapshot_resource = use_resource(move || async move {
        match api::dashboard().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error.set(Some(format!("Failed to load dashboard: {}", e)));
                DashboardSnapshot::default()
            }
        }
    });

    let snapshot = snapshot_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or_default();
    let stats = snapshot.stats;

    rsx! {
        div { class: "page",
            Header {}

            div { class: "container page-container",
                div { class: "page-header page-header-row",
                    div { class: "page-header-content",
                        h1 { class: "page-title", "HR Dashboard" }
                        p { class: "page-description", "Manage internal job postings and applications" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            nav.push("/admin/add-job");
                        },
                        "Add New Job"
                    }
                }

                // Error banner
                if let Some(err) = error() {
                    div { class: "error-banner",
                        span { "{err}" }
                        button {
                            onclick: move |_| error.set(None),
                            "×"
                        }
                    }
                }

                // Stats summary
                div { class: "stats-grid",
                    div { class: "stat-card",
                        div { class: "stat-card-label", "Total Jobs" }
                        div { class: "stat-card-value", "{stats.total_jobs}" }
                    }
                    div { class: "stat-card",
                        div { class: "stat-card-label", "Active Jobs" }
                        div { class: "stat-card-value", "{stats.active_jobs}" }
                    }
                    div { class: "stat-card",
                        div { class: "stat-card-label", "Applications" }
                        div { class: "stat-card-value", "{stats.total_applications}" }
                    }
                    div { class: "stat-card stat-card-accent",
                        div { class: "stat-card-label", "Pending Reviews" }
                        div { class: "stat-card-value", "{stats.pending_reviews}" }
                    }
                }

                div { class: "dashboard-columns",
                    div { class: "card",
                        div { class: "card-header",
                            h2 { class: "card-title", "Recent Job Postings" }
                        }
                        div { class: "card-body activity-list",
                            for job in snapshot.recent_jobs.iter() {
                                div { key: "{job.id}", class: "activity-row",
                                    div { class: "activity-main",
                                        h4 { "{job.title}" }
                                        p { class: "muted", "{job.department}" }
                                        div { class: "activity-meta",
                                            span { "{job.posted_date}" }
                                            span { "{job.applications} applicants" }
                                        }
                                    }
                                    PostingBadge { status: job.status }
                                }
                            }
                        }
                    }

                    div { class: "card",
                        div { class: "card-header",
                            h2 { class: "card-title", "Recent Applications" }
                        }
                        div { class: "card-body activity-list",
                            for application in snapshot.recent_applications.iter() {
                                div { key: "{application.id}", class: "activity-row",
                                    div { class: "activity-main",
                                        h4 { "{application.candidate_name}" }
                                        p { class: "muted", "{application.employee_id}" }
                                        p { class: "text-primary", "{application.position}" }
                                        div { class: "activity-meta",
                                            span { "Applied on {application.applied_date}" }
                                        }
                                    }
                                    ApplicationBadge { status: application.status }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
