//! End-to-end scenarios driven through the public service facade and HTTP router, covering
//! intake, review pickup, status changes with undo, lookup, and reporting.

mod common {
    use std::sync::Arc;

    use applicant_tracker::workflows::applications::{
        ApplicationService, Clock, NewApplication, Timestamp,
    };
    use chrono::NaiveDate;

    pub(super) struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            Timestamp::new(
                NaiveDate::from_ymd_opt(2025, 10, 6)
                    .and_then(|date| date.and_hms_opt(14, 30, 0))
                    .expect("valid fixed time"),
            )
        }
    }

    pub(super) fn service() -> ApplicationService {
        ApplicationService::with_clock(Arc::new(FixedClock))
    }

    pub(super) fn applicant(name: &str, job_id: &str, skills: &str) -> NewApplication {
        NewApplication::new(name, job_id)
            .with_resume_link(format!("https://cv.example.org/{name}"))
            .with_skills(skills)
            .with_experience("3 years")
            .with_education("BA")
    }
}

use applicant_tracker::workflows::applications::{
    application_router, ApplicationStatus, FilterCriteria, StoreError,
};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{applicant, service};
use tower::ServiceExt;

#[test]
fn review_pipeline_round_trip() {
    let service = service();
    for (name, job, skills) in [
        ("Bob", "ENG-1", "Rust"),
        ("Alice", "ENG-1", "Go"),
        ("Carol", "DES-2", "Figma"),
    ] {
        service.add(applicant(name, job, skills)).expect("add");
    }
    assert_eq!(
        service.add(applicant("Alice", "DES-2", "")),
        Err(StoreError::DuplicateName("Alice".to_string()))
    );

    let first = service.process_next().expect("Bob queued first");
    assert_eq!(first.name, "Bob");
    assert_eq!(first.status, ApplicationStatus::UnderReview);
    assert_eq!(first.date_applied.to_string(), "2025-10-06 14:30:00");

    assert_eq!(
        service.update_status("Bob", ApplicationStatus::Shortlisted),
        Ok(true)
    );
    assert_eq!(
        service.update_status("Carol", ApplicationStatus::Rejected),
        Ok(true)
    );

    let report = service.report().expect("applications exist");
    assert_eq!(report.total_applications, 3);
    assert_eq!(report.status_summary.shortlisted, 1);
    assert_eq!(report.status_summary.rejected, 1);
    assert_eq!(report.status_summary.pending, 1);
    assert_eq!(report.queue_length, 2);

    let undo = service.undo_last().expect("Carol change undone");
    assert_eq!(undo.message(), "Reverted Carol: Rejected → Submitted");
    let undo = service.undo_last().expect("Bob change undone");
    assert_eq!(undo.message(), "Reverted Bob: Shortlisted → Under Review");
    assert_eq!(
        service.history("Bob"),
        [ApplicationStatus::Submitted, ApplicationStatus::UnderReview]
    );

    let engineering = service.filter(&FilterCriteria::default().with_job_id("ENG-1"));
    assert_eq!(engineering.len(), 2);
    assert!(service.search_by_name("Dave").is_none());
}

#[tokio::test]
async fn router_serves_shared_store() {
    let service = service();
    service
        .add(applicant("Alice", "ENG-1", "Rust"))
        .expect("add");
    let router = application_router(service.clone());

    let response = router
        .oneshot(
            Request::post("/api/v1/queue/next")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        service.search_by_name("Alice").map(|record| record.status),
        Some(ApplicationStatus::UnderReview)
    );
    assert_eq!(service.queue_len(), 0);
}
