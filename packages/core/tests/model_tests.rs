mod common;

use portal_core::{ApplicationStatus, EmploymentType, ListingSummary, StatusCounts};

use common::{candidate, listing, posting};

#[test]
fn listing_summary_counts_positions_and_applicants() {
    let summary = ListingSummary::from_postings(&listing());
    assert_eq!(summary.open_positions, 4);
    assert_eq!(summary.total_applicants, 40);
}

#[test]
fn skill_preview_reports_hidden_count() {
    let job = posting("1", "Dev", "Technology", &["A", "B", "C", "D", "E"]);
    let (shown, hidden) = job.skill_preview(3);
    assert_eq!(shown, ["A", "B", "C"]);
    assert_eq!(hidden, 2);

    let short = posting("2", "Dev", "Technology", &["A"]);
    assert_eq!(short.skill_preview(3).1, 0);
}

#[test]
fn candidate_initials_and_status_tally() {
    let people = vec![
        candidate("1", "Priya Sharma", "CF1", "Tech", "Dev", &[], ApplicationStatus::UnderReview),
        candidate("2", "Rajesh Kumar", "CF2", "Product", "PM", &[], ApplicationStatus::Shortlisted),
        candidate("3", "Anita Patel", "CF3", "Tech", "Ops", &[], ApplicationStatus::InterviewScheduled),
        candidate("4", "Vikram Singh", "CF4", "Design", "UX", &[], ApplicationStatus::UnderReview),
    ];

    assert_eq!(people[0].initials(), "PS");

    let counts = StatusCounts::tally(&people);
    assert_eq!(counts.total, 4);
    assert_eq!(counts.under_review, 2);
    assert_eq!(counts.shortlisted, 1);
    assert_eq!(counts.interview_scheduled, 1);
    assert_eq!(counts.selected, 0);
}

#[test]
fn employment_type_keys_round_trip_through_parse() {
    for kind in EmploymentType::ALL {
        assert_eq!(EmploymentType::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(EmploymentType::parse("Full-time"), None);
    assert_eq!(EmploymentType::FullTime.label(), "Full-time");
}
