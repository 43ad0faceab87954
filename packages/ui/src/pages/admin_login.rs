use dioxus::prelude::*;

use crate::Header;

/// Administrator entry page. There is no credential check.
#[component]
pub fn AdminLoginPage() -> Element {
    let mut employee_id = use_signal(String::new);
    let nav = use_navigator();

    rsx! {
        div { class: "page",
            Header {}

            div { class: "container page-container narrow",
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Admin Login" }
                        p { class: "muted", "HR and hiring managers only" }
                    }
                    form {
                        class: "card-body",
                        onsubmit: move |e| {
                            e.prevent_default();
                            tracing::debug!(employee_id = %employee_id.read(), "Admin sign-in");
                            nav.push("/admin/dashboard");
                        },
                        div { class: "form-group",
                            label { r#for: "admin-id", "Employee ID" }
                            input {
                                id: "admin-id",
                                value: "{employee_id}",
                                oninput: move |e| employee_id.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "admin-password", "Password" }
                            input { id: "admin-password", r#type: "password" }
                        }
                        button { class: "btn btn-primary btn-block", r#type: "submit", "Sign In" }
                    }
                }
            }
        }
    }
}
