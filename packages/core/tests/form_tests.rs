mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use portal_core::{
    Clock, DASHBOARD_PATH, EmploymentType, FormField, JobFormState, JobId, ManualClock,
    REDIRECT_DELAY, RequiredField, SelectionSet, SubmissionPhase, ValidationError,
};
use std::time::Duration;

use common::options;

fn filled_form() -> JobFormState {
    let mut form = JobFormState::new(JobId::from("JOB-1"));
    form.set(FormField::Title, "Senior Software Developer");
    form.set(FormField::Description, "Valid text");
    form.set(FormField::Designation, "Software Developer");
    form.set(FormField::Location, "Pune, India");
    form
}

#[test]
fn toggle_twice_restores_contents_and_order() {
    let mut set: SelectionSet = ["Java", "React"].into_iter().collect();
    let before = set.clone();

    assert!(set.toggle("AWS"));
    assert_eq!(set.as_slice(), ["Java", "React", "AWS"]);
    assert!(!set.toggle("AWS"));
    assert_eq!(set, before);

    assert!(!set.toggle("Java"));
    assert!(set.toggle("Java"));
    assert_eq!(set.as_slice(), ["React", "Java"]);
}

#[test]
fn collecting_a_selection_drops_duplicates() {
    let set: SelectionSet = ["Java", "Java", "AWS"].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn form_toggles_only_accept_reference_values() {
    let opts = options();
    let mut form = JobFormState::new(JobId::from("JOB-1"));

    assert!(form.toggle_skill(&opts, "Java"));
    assert!(!form.toggle_skill(&opts, "COBOL"));
    assert!(form.toggle_language(&opts, "Hindi"));
    assert!(!form.toggle_language(&opts, "Klingon"));

    assert_eq!(form.skills.as_slice(), ["Java"]);
    assert_eq!(form.languages.as_slice(), ["Hindi"]);
}

#[test]
fn empty_title_is_rejected() {
    let mut form = filled_form();
    form.set(FormField::Title, "");

    let err = form.validate().unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingRequired(vec![RequiredField::Title])
    );
    assert_eq!(err.to_string(), "Please fill in all required fields.");
}

#[test]
fn all_required_fields_filled_is_accepted() {
    assert!(filled_form().validate().is_ok());
}

#[test]
fn whitespace_counts_as_filled() {
    let mut form = filled_form();
    form.set(FormField::Description, " ");
    assert!(form.validate().is_ok());
}

#[test]
fn missing_fields_are_reported_in_form_order() {
    let form = JobFormState::new(JobId::from("JOB-1"));
    assert_eq!(
        form.missing_required(),
        vec![
            RequiredField::Title,
            RequiredField::Description,
            RequiredField::Designation,
            RequiredField::Location,
        ]
    );
}

#[test]
fn rejected_submit_leaves_form_untouched() {
    let mut form = filled_form();
    form.set(FormField::Location, "");
    let before = form.clone();

    let phase = SubmissionPhase::on_submit(&form);
    assert!(matches!(phase, SubmissionPhase::Rejected(_)));
    assert!(!phase.is_locked());
    assert_eq!(form, before);
}

#[test]
fn valid_submit_moves_to_submitting() {
    let phase = SubmissionPhase::on_submit(&filled_form());
    assert_eq!(phase, SubmissionPhase::Submitting);
    assert!(phase.is_locked());
}

#[test]
fn published_phase_schedules_dashboard_redirect() {
    let start = Utc.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap();
    let clock = ManualClock::new(start);

    let phase = SubmissionPhase::on_published(JobId::from("JOB-1"), &clock);
    let SubmissionPhase::Published { navigation, .. } = phase else {
        panic!("expected published phase");
    };

    assert_eq!(navigation.target, DASHBOARD_PATH);
    assert!(!navigation.is_due(clock.now()));
    assert_eq!(navigation.remaining(clock.now()), REDIRECT_DELAY);

    clock.advance(Duration::from_millis(1500));
    assert!(!navigation.is_due(clock.now()));
    assert_eq!(navigation.remaining(clock.now()), Duration::from_millis(500));

    clock.advance(Duration::from_millis(500));
    assert!(navigation.is_due(clock.now()));
    assert_eq!(navigation.remaining(clock.now()), Duration::ZERO);
}

#[test]
fn form_id_comes_from_the_clock() {
    let start = Utc.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap();
    let clock = ManualClock::new(start);
    let form = JobFormState::opened_at(&clock);
    assert_eq!(form.job_id.to_string(), format!("JOB-{}", start.timestamp_millis()));
}

#[test]
fn form_converts_to_posting() {
    let opts = options();
    let mut form = filled_form();
    form.set(FormField::Department, "Technology");
    form.set(FormField::JobType, "contract");
    form.set(FormField::MinExperience, "3");
    form.set(FormField::MaxExperience, "5");
    form.set(FormField::MinSalary, "8");
    form.toggle_skill(&opts, "Java");
    form.toggle_skill(&opts, "AWS");
    form.toggle_language(&opts, "English");

    let posted_on = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
    let posting = form.to_posting(&opts, posted_on).unwrap();

    assert_eq!(posting.id, JobId::from("JOB-1"));
    assert_eq!(posting.experience, "3-5 years");
    assert_eq!(posting.salary, "₹8+ LPA");
    assert_eq!(posting.posted_date, "2024-01-20");
    assert_eq!(posting.applicants, 0);
    assert_eq!(posting.skills, vec!["Java", "AWS"]);
    assert_eq!(posting.languages, vec!["English"]);
    assert_eq!(posting.employment_type, EmploymentType::Contract);
    assert_eq!(posting.designation.as_deref(), Some("Software Developer"));
}

#[test]
fn unspecified_ranges_and_type_fall_back() {
    let opts = options();
    let mut form = filled_form();
    form.set(FormField::MaxSalary, "12");

    let posted_on = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
    let posting = form.to_posting(&opts, posted_on).unwrap();

    assert_eq!(posting.experience, "Not specified");
    assert_eq!(posting.salary, "Up to ₹12 LPA");
    assert_eq!(posting.employment_type, EmploymentType::FullTime);
}

#[test]
fn conversion_rejects_selections_outside_reference_lists() {
    let opts = options();
    let mut form = filled_form();
    form.skills.toggle("COBOL");

    let posted_on = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
    let err = form.to_posting(&opts, posted_on).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownOption {
            kind: "skill",
            value: "COBOL".to_string()
        }
    );
}
