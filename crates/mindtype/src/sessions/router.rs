use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AnswerSubmission, SessionId, ShareId, UserId};
use super::repository::{HistoryRepository, RepositoryError, SessionRepository, ShareRepository};
use super::service::{AssessmentError, AssessmentService};

type SharedService<S, H, L> = Arc<AssessmentService<S, H, L>>;

/// Body for endpoints that act on an existing session.
#[derive(Debug, Deserialize)]
pub(crate) struct SessionReference {
    pub(crate) session_id: SessionId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompareQuery {
    pub(crate) session_a: SessionId,
    pub(crate) session_b: SessionId,
}

/// Router exposing questionnaire, session, history, and share endpoints.
pub fn assessment_router<S, H, L>(service: SharedService<S, H, L>) -> Router
where
    S: SessionRepository + 'static,
    H: HistoryRepository + 'static,
    L: ShareRepository + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(questions_handler::<S, H, L>))
        .route("/api/v1/sessions", post(submit_handler::<S, H, L>))
        .route(
            "/api/v1/sessions/:session_id/result",
            get(result_handler::<S, H, L>),
        )
        .route(
            "/api/v1/users/:user_id/history",
            post(save_history_handler::<S, H, L>).get(list_history_handler::<S, H, L>),
        )
        .route(
            "/api/v1/users/:user_id/history/compare",
            get(compare_history_handler::<S, H, L>),
        )
        .route("/api/v1/shares", post(share_handler::<S, H, L>))
        .route("/api/v1/shares/:share_id", get(shared_handler::<S, H, L>))
        .with_state(service)
}

pub(crate) async fn questions_handler<S, H, L>(
    State(service): State<SharedService<S, H, L>>,
) -> Response
where
    S: SessionRepository + 'static,
    H: HistoryRepository + 'static,
    L: ShareRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.questionnaire())).into_response()
}

pub(crate) async fn submit_handler<S, H, L>(
    State(service): State<SharedService<S, H, L>>,
    axum::Json(submission): axum::Json<AnswerSubmission>,
) -> Response
where
    S: SessionRepository + 'static,
    H: HistoryRepository + 'static,
    L: ShareRepository + 'static,
{
    match service.submit(submission) {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn result_handler<S, H, L>(
    State(service): State<SharedService<S, H, L>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionRepository + 'static,
    H: HistoryRepository + 'static,
    L: ShareRepository + 'static,
{
    match service.result(&SessionId(session_id)) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn save_history_handler<S, H, L>(
    State(service): State<SharedService<S, H, L>>,
    Path(user_id): Path<String>,
    axum::Json(reference): axum::Json<SessionReference>,
) -> Response
where
    S: SessionRepository + 'static,
    H: HistoryRepository + 'static,
    L: ShareRepository + 'static,
{
    match service.save_to_history(&UserId(user_id), &reference.session_id) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_history_handler<S, H, L>(
    State(service): State<SharedService<S, H, L>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: SessionRepository + 'static,
    H: HistoryRepository + 'static,
    L: ShareRepository + 'static,
{
    let user_id = UserId(user_id);
    match service.history(&user_id) {
        Ok(records) => {
            let payload = json!({
                "user_id": user_id,
                "results": records,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn compare_history_handler<S, H, L>(
    State(service): State<SharedService<S, H, L>>,
    Path(user_id): Path<String>,
    Query(query): Query<CompareQuery>,
) -> Response
where
    S: SessionRepository + 'static,
    H: HistoryRepository + 'static,
    L: ShareRepository + 'static,
{
    match service.compare_history(&UserId(user_id), &query.session_a, &query.session_b) {
        Ok(comparison) => (StatusCode::OK, axum::Json(comparison)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn share_handler<S, H, L>(
    State(service): State<SharedService<S, H, L>>,
    axum::Json(reference): axum::Json<SessionReference>,
) -> Response
where
    S: SessionRepository + 'static,
    H: HistoryRepository + 'static,
    L: ShareRepository + 'static,
{
    match service.share(&reference.session_id) {
        Ok(receipt) => (StatusCode::CREATED, axum::Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn shared_handler<S, H, L>(
    State(service): State<SharedService<S, H, L>>,
    Path(share_id): Path<String>,
) -> Response
where
    S: SessionRepository + 'static,
    H: HistoryRepository + 'static,
    L: ShareRepository + 'static,
{
    match service.shared(&ShareId(share_id)) {
        Ok(shared) => (StatusCode::OK, axum::Json(shared)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentError) -> Response {
    let status = if error.is_invalid_input() {
        StatusCode::BAD_REQUEST
    } else if error.is_not_found() {
        StatusCode::NOT_FOUND
    } else if matches!(error, AssessmentError::Repository(RepositoryError::Conflict)) {
        StatusCode::CONFLICT
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let mut payload = json!({ "error": error.to_string() });
    if let AssessmentError::IncompleteAnswers { answered, required } = error {
        payload["answered"] = json!(answered);
        payload["required"] = json!(required);
    }
    (status, axum::Json(payload)).into_response()
}
