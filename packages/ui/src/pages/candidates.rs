//! Candidates page - application review with search.

use dioxus::prelude::*;
use portal_core::{CandidateApplication, StatusCounts, filter_records};

use crate::{ApplicationBadge, Header};

/// Candidate applications page component.
#[component]
pub fn CandidatesPage() -> Element {
    let mut query = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let candidates_resource = use_resource(move || async move {
        match api::list_candidates().await {
            Ok(list) => list,
            Err(e) => {
                error.set(Some(format!("Failed to load candidates: {}", e)));
                Vec::new()
            }
        }
    });

    let candidates: Vec<CandidateApplication> = candidates_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or_default();
    let loaded = candidates_resource.read().is_some();
    let counts = StatusCounts::tally(&candidates);
    let filtered = filter_records(&candidates, &query.read());

    rsx! {
        div { class: "page",
            Header {}

            div { class: "container page-container",
                div { class: "page-header",
                    h1 { class: "page-title", "Candidate Applications" }
                    p { class: "page-description", "View and manage all internal job applications" }
                }

                if let Some(err) = error() {
                    div { class: "error-banner",
                        span { "{err}" }
                        button {
                            onclick: move |_| error.set(None),
                            "×"
                        }
                    }
                }

                div { class: "card search-card",
                    input {
                        class: "search-input",
                        r#type: "search",
                        placeholder: "Search by name, employee ID, department, or skills...",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                }

                div { class: "stats-grid",
                    div { class: "stat-card",
                        div { class: "stat-card-value", "{counts.total}" }
                        div { class: "stat-card-label", "Total Applications" }
                    }
                    div { class: "stat-card",
                        div { class: "stat-card-value text-warning", "{counts.under_review}" }
                        div { class: "stat-card-label", "Under Review" }
                    }
                    div { class: "stat-card",
                        div { class: "stat-card-value", "{counts.shortlisted}" }
                        div { class: "stat-card-label", "Shortlisted" }
                    }
                    div { class: "stat-card",
                        div { class: "stat-card-value text-accent", "{counts.interview_scheduled}" }
                        div { class: "stat-card-label", "Interviews" }
                    }
                }

                div { class: "candidate-list",
                    for candidate in filtered.iter() {
                        {
                            let initials = candidate.initials();
                            let skills = candidate.skills.clone();

                            rsx! {
                                div { key: "{candidate.id}", class: "card candidate-card",
                                    div { class: "candidate-info",
                                        div { class: "avatar", "{initials}" }
                                        div {
                                            div { class: "candidate-heading",
                                                h3 { "{candidate.name}" }
                                                ApplicationBadge { status: candidate.status }
                                            }
                                            div { class: "candidate-contact",
                                                span { "{candidate.employee_id} • {candidate.current_role}" }
                                                span { "{candidate.location}" }
                                                span { "{candidate.email}" }
                                                span { "{candidate.phone}" }
                                            }
                                            dl { class: "candidate-details",
                                                dt { "Applied for: " }
                                                dd { class: "text-primary", "{candidate.applied_for}" }
                                                dt { "Department: " }
                                                dd { "{candidate.current_department}" }
                                                dt { "Experience: " }
                                                dd { "{candidate.experience}" }
                                                dt { "Applied on: " }
                                                dd { "{candidate.application_date}" }
                                            }
                                        }
                                    }
                                    div { class: "candidate-skills",
                                        h4 { "Skills" }
                                        div { class: "skill-list",
                                            for skill in skills {
                                                span { class: "skill-tag", "{skill}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if loaded && filtered.is_empty() {
                    div { class: "card empty-state",
                        p { "No candidates found matching your search criteria." }
                    }
                }
            }
        }
    }
}
