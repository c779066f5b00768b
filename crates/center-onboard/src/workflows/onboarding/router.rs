use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::repository::{ApplicationId, OnboardingRepository, RepositoryError};
use super::service::{OnboardingService, OnboardingServiceError};
use super::snapshot::FormSnapshot;

/// Router builder exposing HTTP endpoints for wizard persistence and progress.
pub fn onboarding_router<R>(service: Arc<OnboardingService<R>>) -> Router
where
    R: OnboardingRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/onboarding/applications",
            post(create_handler::<R>).get(drafts_handler::<R>),
        )
        .route(
            "/api/v1/onboarding/applications/:application_id",
            patch(update_handler::<R>),
        )
        .route(
            "/api/v1/onboarding/applications/:application_id/progress",
            get(progress_handler::<R>),
        )
        .route(
            "/api/v1/onboarding/applications/:application_id/submit",
            post(submit_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CreateApplicationRequest {
    #[serde(default)]
    pub(crate) snapshot: Option<FormSnapshot>,
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    axum::Json(request): axum::Json<CreateApplicationRequest>,
) -> Response
where
    R: OnboardingRepository + 'static,
{
    match service.create(request.snapshot) {
        Ok(record) => {
            let percent = service.engine().overall_progress(&record.snapshot);
            let view = record.status_view(percent);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DraftsQuery {
    #[serde(default = "default_drafts_limit")]
    pub(crate) limit: usize,
}

fn default_drafts_limit() -> usize {
    50
}

pub(crate) async fn drafts_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    Query(query): Query<DraftsQuery>,
) -> Response
where
    R: OnboardingRepository + 'static,
{
    match service.list_drafts(query.limit) {
        Ok(drafts) => {
            let views: Vec<_> = drafts
                .iter()
                .map(|record| {
                    let percent = service.engine().overall_progress(&record.snapshot);
                    record.status_view(percent)
                })
                .collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    Path(application_id): Path<String>,
    axum::Json(patch): axum::Json<FormSnapshot>,
) -> Response
where
    R: OnboardingRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.update_sections(&id, patch) {
        Ok(record) => {
            let percent = service.engine().overall_progress(&record.snapshot);
            let view = record.status_view(percent);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn progress_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: OnboardingRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.progress(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<OnboardingService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: OnboardingRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.submit(&id) {
        Ok(record) => {
            let percent = service.engine().overall_progress(&record.snapshot);
            let view = record.status_view(percent);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: OnboardingServiceError) -> Response {
    match &error {
        OnboardingServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "application not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        OnboardingServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({ "error": "application already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        OnboardingServiceError::IncompleteSubmission { missing } => {
            let payload = json!({
                "error": error.to_string(),
                "missing_steps": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        OnboardingServiceError::AlreadySubmitted { .. } => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        OnboardingServiceError::Repository(RepositoryError::Unavailable(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
