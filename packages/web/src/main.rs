// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use query::ApplyQuery;
use ui::pages::{
    AddJobPage, AdminDashboardPage, AdminLoginPage, ApplyPage, CandidatesPage, HomePage,
};

mod query;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    // Employee-facing routes
    #[layout(PortalLayout)]
        #[route("/")]
        Home {},
        #[route("/apply?:..query")]
        Apply { query: ApplyQuery },
        #[route("/candidates")]
        Candidates {},

        // Admin routes; no access check
        #[route("/admin/login")]
        AdminLogin {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/admin/add-job")]
        AddJob {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Coforge Internal Job Portal" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Shared frame around every portal page.
#[component]
fn PortalLayout() -> Element {
    rsx! {
        div { class: "portal",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        HomePage {}
    }
}

/// Apply page for the posting named in the query string.
#[component]
fn Apply(query: ApplyQuery) -> Element {
    rsx! {
        ApplyPage { job_id: query.job_id }
    }
}

#[component]
fn Candidates() -> Element {
    rsx! {
        CandidatesPage {}
    }
}

#[component]
fn AdminLogin() -> Element {
    rsx! {
        AdminLoginPage {}
    }
}

#[component]
fn AdminDashboard() -> Element {
    rsx! {
        AdminDashboardPage {}
    }
}

#[component]
fn AddJob() -> Element {
    rsx! {
        AddJobPage {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "container page-container empty-state",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to Job Openings" }
        }
    }
}
