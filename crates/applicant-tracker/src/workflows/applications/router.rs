use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

use super::domain::{ApplicationStatus, NewApplication, ProgressStep};
use super::filter::FilterCriteria;
use super::service::ApplicationService;
use super::store::StoreError;

/// Router builder exposing the application workflow over HTTP.
pub fn application_router(service: ApplicationService) -> Router {
    Router::new()
        .route("/api/v1/applications", post(add_handler).get(filter_handler))
        .route("/api/v1/applications/:name", get(search_handler))
        .route("/api/v1/applications/:name/status", put(update_status_handler))
        .route("/api/v1/applications/:name/history", get(history_handler))
        .route("/api/v1/queue/next", post(process_next_handler))
        .route("/api/v1/changes", get(change_log_handler))
        .route("/api/v1/changes/undo", post(undo_handler))
        .route("/api/v1/report", get(report_handler))
        .route("/api/v1/export/applications.csv", get(export_handler))
        .with_state(service)
}

/// HTTP status used when a store operation fails.
pub(crate) fn status_for(error: &StoreError) -> StatusCode {
    match error {
        StoreError::MissingName => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::DuplicateName(_) => StatusCode::CONFLICT,
        StoreError::UnknownApplicant(_) => StatusCode::NOT_FOUND,
        StoreError::NothingToUndo | StoreError::ApplicantMissing(_) => StatusCode::CONFLICT,
        StoreError::EmptyQueue | StoreError::EmptyReport => StatusCode::NOT_FOUND,
    }
}

fn error_response(error: StoreError) -> Response {
    AppError::from(error).into_response()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub name: String,
    pub steps: Vec<ProgressStep>,
}

pub(crate) async fn add_handler(
    State(service): State<ApplicationService>,
    axum::Json(application): axum::Json<NewApplication>,
) -> Response {
    let name = application.name.clone();
    match service.add(application) {
        Ok(()) => {
            let payload = json!({
                "added": true,
                "message": format!("{name} added successfully!"),
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn filter_handler(
    State(service): State<ApplicationService>,
    Query(criteria): Query<FilterCriteria>,
) -> Response {
    let records = service.filter(&criteria);
    (StatusCode::OK, axum::Json(records)).into_response()
}

pub(crate) async fn search_handler(
    State(service): State<ApplicationService>,
    Path(name): Path<String>,
) -> Response {
    match service.search_by_name(&name) {
        Some(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        None => error_response(StoreError::UnknownApplicant(name)),
    }
}

pub(crate) async fn update_status_handler(
    State(service): State<ApplicationService>,
    Path(name): Path<String>,
    axum::Json(request): axum::Json<StatusUpdateRequest>,
) -> Response {
    let status = match request.status.parse::<ApplicationStatus>() {
        Ok(status) => status,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match service.update_status(&name, status) {
        Ok(updated) => {
            let payload = json!({
                "updated": updated,
                "name": name,
                "status": status,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn history_handler(
    State(service): State<ApplicationService>,
    Path(name): Path<String>,
) -> Response {
    let steps = ProgressStep::from_history(&service.history(&name));
    (StatusCode::OK, axum::Json(HistoryView { name, steps })).into_response()
}

pub(crate) async fn process_next_handler(State(service): State<ApplicationService>) -> Response {
    match service.process_next() {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn change_log_handler(State(service): State<ApplicationService>) -> Response {
    (StatusCode::OK, axum::Json(service.change_log())).into_response()
}

pub(crate) async fn undo_handler(State(service): State<ApplicationService>) -> Response {
    match service.undo_last() {
        Ok(outcome) => {
            let payload = json!({
                "reverted": true,
                "message": outcome.message(),
                "history_trimmed": outcome.history_trimmed,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler(State(service): State<ApplicationService>) -> Response {
    match service.report() {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler(State(service): State<ApplicationService>) -> Response {
    let mut buffer = Vec::new();
    match service.export_csv(&mut buffer) {
        Ok(()) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            buffer,
        )
            .into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
