//! Home page - job listing with search.

use dioxus::prelude::*;
use portal_core::{JobId, JobPosting, ListingSummary, filter_records};

use crate::{Header, JobCard, apply_path};

/// Cards in the "Why Choose Internal Opportunities?" section.
const BENEFITS: [(&str, &str); 4] = [
    ("Career Growth", "Advance within the organization you know and trust"),
    ("Known Culture", "Leverage your understanding of company values"),
    ("Faster Transition", "Quick onboarding with existing relationships"),
    ("Recognition", "Your contributions are already valued"),
];

/// Job listing page component.
#[component]
pub fn HomePage() -> Element {
    let mut jobs = use_signal(Vec::<JobPosting>::new);
    let mut query = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut initialized = use_signal(|| false);
    let nav = use_navigator();

    // Load postings
    let jobs_resource = use_resource(move || async move { api::list_jobs().await });

    use_effect(move || {
        if initialized() {
            return;
        }
        match jobs_resource.read().as_ref() {
            Some(Ok(list)) => {
                jobs.set(list.clone());
                initialized.set(true);
            }
            Some(Err(e)) => {
                error.set(Some(format!("Failed to load jobs: {}", e)));
                initialized.set(true);
            }
            None => {}
        }
    });

    let filtered = filter_records(&jobs.read(), &query.read());
    let summary = ListingSummary::from_postings(&jobs.read());

    rsx! {
        div { class: "page",
            Header {}

            section { class: "hero",
                div { class: "container hero-inner",
                    h1 { class: "hero-title", "Advance Your Career at Coforge" }
                    p { class: "hero-subtitle",
                        "Discover internal opportunities designed for your growth and expertise"
                    }

                    div { class: "hero-stats",
                        div { class: "hero-stat",
                            div { class: "hero-stat-value", "{summary.open_positions}" }
                            div { class: "hero-stat-label", "Open Positions" }
                        }
                        div { class: "hero-stat",
                            div { class: "hero-stat-value", "{summary.total_applicants}" }
                            div { class: "hero-stat-label", "Applications" }
                        }
                        div { class: "hero-stat",
                            div { class: "hero-stat-value", "15+" }
                            div { class: "hero-stat-label", "Departments" }
                        }
                        div { class: "hero-stat",
                            div { class: "hero-stat-value", "98%" }
                            div { class: "hero-stat-label", "Employee Satisfaction" }
                        }
                    }
                }
            }

            section { class: "search-bar",
                div { class: "container",
                    input {
                        class: "search-input",
                        r#type: "search",
                        placeholder: "Search by role, department, or skills...",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                }
            }

            section { class: "container benefits",
                h2 { class: "benefits-title", "Why Choose Internal Opportunities?" }
                div { class: "benefit-grid",
                    for (title, text) in BENEFITS {
                        div { key: "{title}", class: "benefit-card",
                            h3 { "{title}" }
                            p { "{text}" }
                        }
                    }
                }
            }

            // Error banner
            if let Some(err) = error() {
                div { class: "container",
                    div { class: "error-banner",
                        span { "{err}" }
                        button {
                            onclick: move |_| error.set(None),
                            "×"
                        }
                    }
                }
            }

            section { class: "container listing",
                div { class: "listing-header",
                    h2 { "Current Openings" }
                    span { class: "count-badge", "{filtered.len()} positions available" }
                }

                div { class: "job-grid",
                    for job in filtered.iter() {
                        JobCard {
                            key: "{job.id}",
                            job: job.clone(),
                            on_apply: move |id: JobId| {
                                nav.push(apply_path(&id));
                            },
                        }
                    }
                }

                if filtered.is_empty() && initialized() {
                    div { class: "empty-state",
                        p { "No jobs found matching your search criteria." }
                    }
                }
            }
        }
    }
}
