mod common;

use std::error::Error;

use common::reset_db;
use db::repositories::{
    CandidateRepository, DashboardRepository, OptionsRepository, PostingRepository,
};
use db::{DbError, SurrealSource};
use portal_core::{ApplicationStatus, CandidateId, JobId, PortalSource, Seed};

// Every step shares the process-wide connection, so they run in one runtime.
#[tokio::test]
async fn test_repositories() -> Result<(), Box<dyn Error>> {
    let _guard = common::setup_db().await?;
    let seed = db::builtin_seed()?;

    // Empty database: sources fall back to defaults
    let source = SurrealSource::default();
    assert!(source.list_jobs().await?.is_empty());
    assert!(source.list_candidates().await?.is_empty());
    assert_eq!(source.form_options().await?, Default::default());

    let snapshot = source.dashboard().await?;
    assert_eq!(snapshot.stats, Default::default());
    assert!(snapshot.recent_jobs.is_empty());

    // Seeding: loads once, keeps list order
    assert!(db::is_empty().await?);
    assert!(db::seed_if_empty(&seed).await?);
    assert!(!db::seed_if_empty(&seed).await?);

    let jobs = PostingRepository::list().await?;
    assert_eq!(jobs, seed.jobs);
    assert_eq!(PostingRepository::count().await?, 4);

    let candidates = CandidateRepository::list().await?;
    assert_eq!(candidates, seed.candidates);

    let options = OptionsRepository::get().await?;
    assert_eq!(options, seed.options);

    let stats = DashboardRepository::stats().await?;
    assert_eq!(stats.total_jobs, 12);
    assert_eq!(stats.active_jobs, 8);
    assert_eq!(stats.total_applications, 89);
    assert_eq!(stats.pending_reviews, 23);

    let recent = DashboardRepository::recent_jobs(3).await?;
    assert_eq!(recent, seed.dashboard.recent_jobs);

    let applications = DashboardRepository::recent_applications(2).await?;
    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0].candidate_name, "Priya Sharma");
    assert_eq!(applications[1].candidate_name, "Rajesh Kumar");

    // Seeding without postings still counts as populated
    reset_db().await?;
    let no_jobs = Seed {
        jobs: Vec::new(),
        ..seed.clone()
    };
    assert!(db::seed_if_empty(&no_jobs).await?);
    assert!(!db::is_empty().await?);
    assert!(!db::seed_if_empty(&no_jobs).await?);
    assert_eq!(CandidateRepository::list().await?.len(), seed.candidates.len());
    assert_eq!(PostingRepository::count().await?, 0);

    // PostingRepository: create/get/find/exists, duplicate id
    reset_db().await?;
    let posting = common::posting("JOB-1700000000000", "Data Analyst");
    let created = PostingRepository::create(&posting).await?;
    assert_eq!(created, posting);

    let loaded = PostingRepository::get(&posting.id).await?;
    assert_eq!(loaded.designation.as_deref(), Some("Data Analyst"));
    assert_eq!(loaded.languages, vec!["English".to_string()]);

    assert!(PostingRepository::exists(&posting.id).await?);
    assert!(PostingRepository::find(&JobId::from("missing")).await?.is_none());

    let missing = PostingRepository::get(&JobId::from("missing")).await;
    assert!(matches!(missing, Err(DbError::NotFound(_))));

    let duplicate = PostingRepository::create(&posting).await;
    assert!(matches!(duplicate, Err(DbError::Conflict(_))));
    assert_eq!(PostingRepository::count().await?, 1);

    let second = common::posting("JOB-1700000000002", "Platform Engineer");
    PostingRepository::create(&second).await?;
    let ids: Vec<_> = PostingRepository::list()
        .await?
        .into_iter()
        .map(|j| j.id)
        .collect();
    assert_eq!(ids, vec![posting.id.clone(), second.id.clone()]);

    // CandidateRepository: status filter and lookup
    reset_db().await?;
    db::load_seed(&seed).await?;

    let under_review = CandidateRepository::list_by_status(ApplicationStatus::UnderReview).await?;
    let names: Vec<_> = under_review.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Priya Sharma", "Vikram Singh"]);

    let selected = CandidateRepository::list_by_status(ApplicationStatus::Selected).await?;
    assert!(selected.is_empty());

    let anita = CandidateRepository::get(&CandidateId("3".to_string())).await?;
    assert_eq!(anita.status, ApplicationStatus::InterviewScheduled);

    let missing = CandidateRepository::get(&CandidateId("99".to_string())).await;
    assert!(matches!(missing, Err(DbError::NotFound(_))));

    // SurrealSource: publish appends to listing, fronts recent list, bumps counters
    let source = SurrealSource::new(3);
    let posting = common::posting("JOB-1700000000001", "Data Analyst");
    source.publish_job(posting.clone()).await?;

    let jobs = source.list_jobs().await?;
    assert_eq!(jobs.len(), 5);
    assert_eq!(jobs.last().map(|j| &j.id), Some(&posting.id));

    let found = source.find_job(&posting.id).await?;
    assert_eq!(found.as_ref().map(|j| j.title.as_str()), Some("Data Analyst"));

    let snapshot = source.dashboard().await?;
    assert_eq!(snapshot.stats.total_jobs, 13);
    assert_eq!(snapshot.stats.active_jobs, 9);
    assert_eq!(snapshot.stats.total_applications, 89);
    assert_eq!(snapshot.recent_jobs.len(), 3);
    assert_eq!(snapshot.recent_jobs[0].id, posting.id);
    assert_eq!(snapshot.recent_jobs[1].title, "Senior Software Developer");

    let again = source.publish_job(posting).await;
    assert!(matches!(again, Err(DbError::Conflict(_))));
    let snapshot = source.dashboard().await?;
    assert_eq!(snapshot.stats.total_jobs, 13);
    assert_eq!(source.list_jobs().await?.len(), 5);

    // Publishing into an empty database starts every list and counter
    reset_db().await?;
    let first = common::posting("JOB-1700000000003", "QA Lead");
    let next = common::posting("JOB-1700000000004", "Scrum Master");
    source.publish_job(first.clone()).await?;
    source.publish_job(next.clone()).await?;

    let ids: Vec<_> = source.list_jobs().await?.into_iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![first.id.clone(), next.id.clone()]);

    let snapshot = source.dashboard().await?;
    assert_eq!(snapshot.stats.total_jobs, 2);
    assert_eq!(snapshot.stats.active_jobs, 2);
    assert_eq!(snapshot.stats.total_applications, 0);
    let recent: Vec<_> = snapshot.recent_jobs.into_iter().map(|r| r.id).collect();
    assert_eq!(recent, vec![next.id, first.id]);

    Ok(())
}
