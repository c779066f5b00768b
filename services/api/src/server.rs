use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryOnboardingRepository};
use crate::routes::with_onboarding_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use center_onboard::config::AppConfig;
use center_onboard::error::AppError;
use center_onboard::telemetry;
use center_onboard::workflows::onboarding::{OnboardingService, ProgressEngine};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryOnboardingRepository::default());
    let engine = ProgressEngine::standard(config.wizard.overall_strategy);
    let onboarding_service = Arc::new(OnboardingService::new(repository, engine));

    let app = with_onboarding_routes(onboarding_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, strategy = config.wizard.overall_strategy.label(), "onboarding progress service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
