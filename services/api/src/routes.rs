use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use center_onboard::workflows::onboarding::{
    onboarding_router, FormSnapshot, OnboardingProgressReport, OnboardingRepository,
    OnboardingService, OverallStrategy, ProgressEngine,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Stateless preview: compute a progress report for a posted snapshot without
/// persisting anything. Used by the wizard UI to render progress while a draft
/// lives only in the browser.
#[derive(Debug, Deserialize)]
pub(crate) struct ProgressPreviewRequest {
    #[serde(default)]
    pub(crate) snapshot: FormSnapshot,
    #[serde(default)]
    pub(crate) strategy: Option<OverallStrategy>,
}

pub(crate) fn with_onboarding_routes<R>(service: Arc<OnboardingService<R>>) -> axum::Router
where
    R: OnboardingRepository + 'static,
{
    onboarding_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/onboarding/progress/preview",
            axum::routing::post(progress_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn progress_preview_endpoint(
    Json(payload): Json<ProgressPreviewRequest>,
) -> Json<OnboardingProgressReport> {
    let ProgressPreviewRequest { snapshot, strategy } = payload;

    let engine = ProgressEngine::standard(strategy.unwrap_or(OverallStrategy::Weighted));
    Json(engine.report(&snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use center_onboard::workflows::onboarding::snapshot::{CompanyInfo, FormSnapshot};

    #[tokio::test]
    async fn preview_endpoint_defaults_to_weighted_strategy() {
        let request = ProgressPreviewRequest {
            snapshot: FormSnapshot::empty(),
            strategy: None,
        };

        let Json(report) = progress_preview_endpoint(Json(request)).await;

        assert_eq!(report.strategy, OverallStrategy::Weighted);
        assert_eq!(report.overall_percent, 0);
        assert_eq!(report.groups.len(), 5);
        assert_eq!(report.next_step, Some("company_info"));
    }

    #[tokio::test]
    async fn preview_endpoint_honors_strategy_override() {
        let snapshot = FormSnapshot {
            company_info: Some(CompanyInfo {
                legal_name: Some("Prairie Ridge Treatment Center LLC".to_string()),
                federal_tax_id: Some("42-1234567".to_string()),
                ..CompanyInfo::default()
            }),
            ..FormSnapshot::default()
        };
        let request = ProgressPreviewRequest {
            snapshot,
            strategy: Some(OverallStrategy::Unweighted),
        };

        let Json(report) = progress_preview_endpoint(Json(request)).await;

        assert_eq!(report.strategy, OverallStrategy::Unweighted);
        // One of eleven steps complete.
        assert_eq!(report.overall_percent, 9);
    }
}
