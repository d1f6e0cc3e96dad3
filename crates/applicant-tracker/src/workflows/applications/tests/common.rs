use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use axum::response::Response;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::workflows::applications::domain::{Clock, NewApplication, Timestamp};
use crate::workflows::applications::service::ApplicationService;
use crate::workflows::applications::store::ApplicationStore;

/// Clock that advances one second per reading, starting at 2025-10-01 09:00:00.
#[derive(Debug, Default)]
pub(super) struct SteppingClock {
    ticks: AtomicI64,
}

impl SteppingClock {
    pub(super) fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 1)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .expect("valid start time")
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Timestamp {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed);
        Timestamp::new(Self::start() + Duration::seconds(tick))
    }
}

pub(super) fn stepping_store() -> ApplicationStore {
    ApplicationStore::with_clock(Arc::new(SteppingClock::default()))
}

pub(super) fn stepping_service() -> ApplicationService {
    ApplicationService::with_clock(Arc::new(SteppingClock::default()))
}

pub(super) fn application(name: &str, job_id: &str) -> NewApplication {
    NewApplication::new(name, job_id)
        .with_resume_link(format!(
            "https://resumes.example.com/{}.pdf",
            name.to_lowercase()
        ))
        .with_skills("Rust, SQL, Kubernetes")
        .with_experience("4 years backend engineering")
        .with_education("BSc Computer Science")
}

pub(super) fn store_with(names: &[&str]) -> ApplicationStore {
    let mut store = stepping_store();
    for name in names {
        store
            .add(application(name, "ENG-1"))
            .expect("fixture application added");
    }
    store
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
