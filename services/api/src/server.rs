use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryHistoryRepository, InMemorySessionRepository, InMemoryShareRepository,
};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use mindtype::assessment::{Questionnaire, ScoringEngine};
use mindtype::config::AppConfig;
use mindtype::error::AppError;
use mindtype::sessions::AssessmentService;
use mindtype::telemetry;
use std::path::Path;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) fn load_questionnaire(path: Option<&Path>) -> Result<Questionnaire, AppError> {
    match path {
        Some(path) => {
            let questionnaire = Questionnaire::from_path(path)?;
            info!(path = %path.display(), questions = questionnaire.len(), "loaded questionnaire");
            Ok(questionnaire)
        }
        None => Ok(Questionnaire::standard()),
    }
}

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

    let questionnaire = load_questionnaire(config.assessment.questionnaire_path.as_deref())?;
    let engine = Arc::new(ScoringEngine::new(Arc::new(questionnaire)));
    let assessment_service = Arc::new(
        AssessmentService::new(
            engine,
            Arc::new(InMemorySessionRepository::default()),
            Arc::new(InMemoryHistoryRepository::default()),
            Arc::new(InMemoryShareRepository::default()),
        )
        .with_share_base_path(config.assessment.share_base_path.clone()),
    );

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "personality assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
