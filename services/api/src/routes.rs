use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use mindtype::catalog::{lookup_careers, lookup_report, CareerMatch, TypeReport};
use mindtype::compare::{relationship, RelationshipAnalysis};
use mindtype::error::AppError;
use mindtype::sessions::{
    assessment_router, AssessmentService, HistoryRepository, SessionRepository, ShareRepository,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct CompatibilityRequest {
    pub(crate) type_a: String,
    pub(crate) type_b: String,
}

pub(crate) fn with_assessment_routes<S, H, L>(
    service: Arc<AssessmentService<S, H, L>>,
) -> axum::Router
where
    S: SessionRepository + 'static,
    H: HistoryRepository + 'static,
    L: ShareRepository + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/reports/:type_code",
            axum::routing::get(report_endpoint),
        )
        .route(
            "/api/v1/careers/:type_code",
            axum::routing::get(careers_endpoint),
        )
        .route(
            "/api/v1/compatibility",
            axum::routing::post(compatibility_endpoint),
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

pub(crate) async fn report_endpoint(
    Path(type_code): Path<String>,
) -> Result<Json<TypeReport>, AppError> {
    Ok(Json(lookup_report(&type_code)?))
}

pub(crate) async fn careers_endpoint(
    Path(type_code): Path<String>,
) -> Result<Json<CareerMatch>, AppError> {
    Ok(Json(lookup_careers(&type_code)?))
}

pub(crate) async fn compatibility_endpoint(
    Json(payload): Json<CompatibilityRequest>,
) -> Result<Json<RelationshipAnalysis>, AppError> {
    Ok(Json(relationship(&payload.type_a, &payload.type_b)?))
}
