//! Add-job page - the job creation form.
//!
//! Field edits go straight into a [`JobFormState`] signal. Submitting runs the
//! required-field check locally, then hands the form to the server. Once the
//! posting is stored a success notice is shown and a spawned task navigates to
//! the dashboard when the [`ScheduledNavigation`] falls due.
//!
//! [`ScheduledNavigation`]: portal_core::ScheduledNavigation

use dioxus::core::Task;
use dioxus::prelude::*;
use portal_core::{
    Clock, DASHBOARD_PATH, EmploymentType, FormField, FormOptions, JobFormState, SubmissionPhase,
    SystemClock,
};

use crate::{Header, Notice, NoticeBanner};

/// Job creation page component.
#[component]
pub fn AddJobPage() -> Element {
    let mut form = use_signal(|| JobFormState::opened_at(&SystemClock));
    let mut phase = use_signal(SubmissionPhase::default);
    let mut notice = use_signal(|| None::<Notice>);
    let mut options = use_signal(FormOptions::default);
    let mut redirect = use_signal(|| None::<Task>);
    let nav = use_navigator();

    // Load the reference option lists
    let options_resource = use_resource(move || async move { api::form_options().await });

    use_effect(move || match options_resource.read().as_ref() {
        Some(Ok(loaded)) => options.set(loaded.clone()),
        Some(Err(e)) => notice.set(Some(Notice::error(
            "Failed to load form options",
            e.to_string(),
        ))),
        None => {}
    });

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if phase.read().is_locked() {
            return;
        }

        let next = SubmissionPhase::on_submit(&form.read());
        if let SubmissionPhase::Rejected(err) = &next {
            notice.set(Some(Notice::error("Validation Error", err.to_string())));
            phase.set(next);
            return;
        }

        phase.set(next);
        let submitted = form();

        spawn(async move {
            match api::create_job(submitted).await {
                Ok(posting) => {
                    tracing::info!(job_id = %posting.id, "Job posted");
                    notice.set(Some(Notice::success(
                        "Job Posted Successfully!",
                        "The job posting has been created and is now live.",
                    )));

                    let published = SubmissionPhase::on_published(posting.id, &SystemClock);
                    if let SubmissionPhase::Published { navigation, .. } = &published {
                        let wait = navigation.remaining(SystemClock.now());
                        let target = navigation.target.clone();
                        // Dropped with the page if the user leaves first.
                        let task = spawn(async move {
                            crate::timer::sleep(wait).await;
                            nav.push(target);
                        });
                        redirect.set(Some(task));
                    }
                    phase.set(published);
                }
                Err(e) => {
                    notice.set(Some(Notice::error("Failed to create job", e.to_string())));
                    phase.set(SubmissionPhase::Editing);
                }
            }
        });
    };

    let back = move |_: MouseEvent| {
        if let Some(task) = redirect.take() {
            task.cancel();
        }
        nav.push(DASHBOARD_PATH);
    };

    let locked = phase.read().is_locked();
    let opts = options.read().clone();

    rsx! {
        div { class: "page",
            Header {}

            div { class: "container page-container",
                div { class: "page-header",
                    button { class: "btn btn-ghost", onclick: back, "← Back to Dashboard" }
                    h1 { class: "page-title", "Add New Job Posting" }
                    p { class: "page-description", "Create a new internal job opportunity" }
                }

                if let Some(current) = notice() {
                    NoticeBanner {
                        notice: current,
                        on_dismiss: move |_| notice.set(None),
                    }
                }

                div { class: "card form-card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Job Details" }
                    }

                    form { class: "card-body job-form", onsubmit: submit,
                        div { class: "form-grid",
                            div { class: "form-group",
                                label { r#for: "jobId", "Job ID" }
                                input {
                                    id: "jobId",
                                    class: "readonly",
                                    readonly: true,
                                    value: "{form.read().job_id}",
                                }
                            }
                            div { class: "form-group",
                                label { r#for: "title", "Job Title *" }
                                input {
                                    id: "title",
                                    placeholder: "e.g. Senior Software Developer",
                                    value: "{form.read().title}",
                                    oninput: move |e| form.write().set(FormField::Title, e.value()),
                                }
                            }
                        }

                        div { class: "form-group",
                            label { r#for: "description", "Job Description *" }
                            textarea {
                                id: "description",
                                rows: 5,
                                placeholder: "Describe the role, responsibilities, and requirements...",
                                value: "{form.read().description}",
                                oninput: move |e| form.write().set(FormField::Description, e.value()),
                            }
                        }

                        div { class: "form-grid",
                            OptionSelect {
                                id: "designation",
                                caption: "Designation *",
                                placeholder: "Select designation",
                                choices: opts.designations.clone(),
                                value: form.read().designation.clone(),
                                on_change: move |v: String| form.write().set(FormField::Designation, v),
                            }
                            OptionSelect {
                                id: "location",
                                caption: "Location *",
                                placeholder: "Select location",
                                choices: opts.locations.clone(),
                                value: form.read().location.clone(),
                                on_change: move |v: String| form.write().set(FormField::Location, v),
                            }
                            OptionSelect {
                                id: "department",
                                caption: "Department",
                                placeholder: "Select department",
                                choices: opts.departments.clone(),
                                value: form.read().department.clone(),
                                on_change: move |v: String| form.write().set(FormField::Department, v),
                            }
                            div { class: "form-group",
                                label { r#for: "jobType", "Job Type" }
                                select {
                                    id: "jobType",
                                    value: "{form.read().job_type}",
                                    onchange: move |e| form.write().set(FormField::JobType, e.value()),
                                    option { value: "", "Select job type" }
                                    for kind in EmploymentType::ALL {
                                        option { value: kind.as_str(), {kind.label()} }
                                    }
                                }
                            }
                        }

                        div { class: "form-grid",
                            RangeInputs {
                                caption: "Experience (Years)",
                                min: form.read().min_experience.clone(),
                                max: form.read().max_experience.clone(),
                                on_min: move |v: String| form.write().set(FormField::MinExperience, v),
                                on_max: move |v: String| form.write().set(FormField::MaxExperience, v),
                            }
                            RangeInputs {
                                caption: "Salary Range (LPA)",
                                min: form.read().min_salary.clone(),
                                max: form.read().max_salary.clone(),
                                on_min: move |v: String| form.write().set(FormField::MinSalary, v),
                                on_max: move |v: String| form.write().set(FormField::MaxSalary, v),
                            }
                        }

                        fieldset { class: "form-group",
                            legend { "Skills Required" }
                            div { class: "checkbox-grid",
                                for skill in opts.skills.iter() {
                                    {
                                        let value = skill.clone();
                                        let checked = form.read().skills.contains(skill);

                                        rsx! {
                                            label { key: "{skill}", class: "checkbox",
                                                input {
                                                    r#type: "checkbox",
                                                    checked,
                                                    onchange: move |_| {
                                                        let options = options.read();
                                                        form.write().toggle_skill(&options, &value);
                                                    },
                                                }
                                                "{skill}"
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        fieldset { class: "form-group",
                            legend { "Languages Known" }
                            div { class: "checkbox-grid",
                                for language in opts.languages.iter() {
                                    {
                                        let value = language.clone();
                                        let checked = form.read().languages.contains(language);

                                        rsx! {
                                            label { key: "{language}", class: "checkbox",
                                                input {
                                                    r#type: "checkbox",
                                                    checked,
                                                    onchange: move |_| {
                                                        let options = options.read();
                                                        form.write().toggle_language(&options, &value);
                                                    },
                                                }
                                                "{language}"
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "form-actions",
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: locked,
                                if matches!(phase(), SubmissionPhase::Submitting) {
                                    "Posting..."
                                } else {
                                    "Post Job"
                                }
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: back,
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OptionSelect(
    id: &'static str,
    caption: &'static str,
    placeholder: &'static str,
    choices: Vec<String>,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { r#for: id, {caption} }
            select {
                id,
                value: "{value}",
                onchange: move |e| on_change.call(e.value()),
                option { value: "", {placeholder} }
                for choice in choices.iter() {
                    option { key: "{choice}", value: "{choice}", "{choice}" }
                }
            }
        }
    }
}

/// Minimum and maximum inputs sharing one label.
#[component]
fn RangeInputs(
    caption: &'static str,
    min: String,
    max: String,
    on_min: EventHandler<String>,
    on_max: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { {caption} }
            div { class: "range-inputs",
                input {
                    r#type: "number",
                    min: "0",
                    placeholder: "Min",
                    value: "{min}",
                    oninput: move |e| on_min.call(e.value()),
                }
                input {
                    r#type: "number",
                    min: "0",
                    placeholder: "Max",
                    value: "{max}",
                    oninput: move |e| on_max.call(e.value()),
                }
            }
        }
    }
}
