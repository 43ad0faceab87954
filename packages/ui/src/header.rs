use dioxus::prelude::*;

/// Top navigation bar shared by every page.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container header-inner",
                Link {
                    to: "/",
                    class: "brand",
                    div { class: "brand-mark", "▣" }
                    div {
                        h1 { class: "brand-name", "Coforge" }
                        p { class: "brand-tagline", "Internal Job Portal" }
                    }
                }

                nav { class: "header-nav",
                    Link { to: "/", class: "nav-link", "Job Openings" }
                    Link { to: "/candidates", class: "nav-link", "Candidates" }
                }

                div { class: "header-actions",
                    Link { to: "/admin/login", class: "btn btn-outline btn-small", "Admin Login" }
                    Link { to: "/apply", class: "btn btn-primary btn-small", "Apply Now" }
                }
            }
        }
    }
}
