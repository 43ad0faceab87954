mod common;

use std::error::Error;

use chrono::NaiveDate;
use portal_core::{
    DashboardSnapshot, DashboardStats, FormField, JobFormState, JobId, MemorySource,
    MemorySourceError, PortalSource, PostingStatus, PublishError, RecentPosting, RequiredField,
    Seed, ValidationError, publish_form,
};

use common::{listing, options, posting};

fn seed() -> Seed {
    let jobs = listing();
    Seed {
        dashboard: DashboardSnapshot {
            stats: DashboardStats {
                total_jobs: 12,
                active_jobs: 8,
                total_applications: 89,
                pending_reviews: 23,
            },
            recent_jobs: jobs.iter().take(3).map(RecentPosting::from).collect(),
            recent_applications: Vec::new(),
        },
        jobs,
        candidates: Vec::new(),
        options: options(),
    }
}

#[tokio::test]
async fn lists_seed_data_in_order() -> Result<(), Box<dyn Error>> {
    let source = MemorySource::new(seed(), 3);

    let jobs = source.list_jobs().await?;
    assert_eq!(jobs, listing());

    let found = source.find_job(&JobId::from("3")).await?;
    assert_eq!(found.map(|j| j.title), Some("DevOps Engineer".to_string()));
    assert!(source.find_job(&JobId::from("99")).await?.is_none());

    assert_eq!(source.form_options().await?, options());
    Ok(())
}

#[tokio::test]
async fn published_job_reaches_listing_and_dashboard() -> Result<(), Box<dyn Error>> {
    let source = MemorySource::new(seed(), 3);
    let new_job = posting("JOB-1705395600000", "Data Analyst", "Technology", &["Python"]);

    source.publish_job(new_job.clone()).await?;

    let jobs = source.list_jobs().await?;
    assert_eq!(jobs.len(), 5);
    assert_eq!(jobs.last(), Some(&new_job));

    let dashboard = source.dashboard().await?;
    assert_eq!(dashboard.stats.total_jobs, 13);
    assert_eq!(dashboard.stats.active_jobs, 9);
    assert_eq!(dashboard.stats.total_applications, 89);
    assert_eq!(dashboard.recent_jobs.len(), 3);
    assert_eq!(dashboard.recent_jobs[0].id, new_job.id);
    assert_eq!(dashboard.recent_jobs[0].status, PostingStatus::Active);
    Ok(())
}

#[tokio::test]
async fn duplicate_publish_is_rejected() -> Result<(), Box<dyn Error>> {
    let source = MemorySource::new(seed(), 3);
    let duplicate = posting("1", "Another", "Technology", &[]);

    let result = source.publish_job(duplicate).await;
    assert!(matches!(result, Err(MemorySourceError::DuplicateJob(_))));
    assert_eq!(source.list_jobs().await?.len(), 4);
    Ok(())
}

fn submitted_form() -> JobFormState {
    let opts = options();
    let mut form = JobFormState::new(JobId::from("JOB-1705395600000"));
    form.set(FormField::Title, "Data Analyst");
    form.set(FormField::Description, "Own the reporting pipeline");
    form.set(FormField::Designation, "Analyst");
    form.set(FormField::Location, "Chennai, India");
    form.toggle_skill(&opts, "Java");
    form
}

#[tokio::test]
async fn form_without_title_is_not_published() -> Result<(), Box<dyn Error>> {
    let source = MemorySource::new(seed(), 3);
    let mut form = submitted_form();
    form.set(FormField::Title, "");
    let today = NaiveDate::from_ymd_opt(2024, 1, 16).ok_or("bad date")?;

    let result = publish_form(&source, &form, today).await;
    assert!(matches!(
        result,
        Err(PublishError::Invalid(ValidationError::MissingRequired(ref fields)))
            if fields == &vec![RequiredField::Title]
    ));
    assert_eq!(source.list_jobs().await?.len(), 4);
    assert_eq!(source.dashboard().await?.stats.total_jobs, 12);
    Ok(())
}

#[tokio::test]
async fn submitted_form_is_published_last() -> Result<(), Box<dyn Error>> {
    let source = MemorySource::new(seed(), 3);
    let today = NaiveDate::from_ymd_opt(2024, 1, 16).ok_or("bad date")?;

    let published = publish_form(&source, &submitted_form(), today).await?;
    assert_eq!(published.title, "Data Analyst");
    assert_eq!(published.posted_date, "2024-01-16");
    assert_eq!(published.skills, vec!["Java".to_string()]);

    let jobs = source.list_jobs().await?;
    assert_eq!(jobs.len(), 5);
    assert_eq!(jobs.last(), Some(&published));

    let again = publish_form(&source, &submitted_form(), today).await;
    assert!(matches!(
        again,
        Err(PublishError::Source(MemorySourceError::DuplicateJob(_)))
    ));
    Ok(())
}

#[test]
fn seed_parses_from_json() -> Result<(), Box<dyn Error>> {
    let json = r#"{
        "jobs": [{
            "id": "1",
            "title": "Senior Software Developer",
            "department": "Technology",
            "location": "Pune, India",
            "experience": "3-5 years",
            "salary": "₹8-12 LPA",
            "posted_date": "2 days ago",
            "applicants": 24,
            "skills": ["Java", "AWS"],
            "employment_type": "full_time"
        }],
        "options": { "skills": ["Java"] }
    }"#;

    let seed = Seed::from_json(json)?;
    assert_eq!(seed.jobs.len(), 1);
    assert_eq!(seed.jobs[0].applicants, 24);
    assert!(seed.candidates.is_empty());
    assert_eq!(seed.options.skills, vec!["Java"]);
    assert_eq!(seed.dashboard, DashboardSnapshot::default());
    Ok(())
}

#[test]
fn malformed_seed_is_an_error() {
    assert!(Seed::from_json("{ \"jobs\": 3 }").is_err());
}
