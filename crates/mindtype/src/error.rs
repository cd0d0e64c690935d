use crate::assessment::{AnswerFileError, QuestionnaireError, ScoringError};
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::sessions::AssessmentError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Questionnaire(QuestionnaireError),
    Answers(AnswerFileError),
    Scoring(ScoringError),
    Catalog(CatalogError),
    Assessment(AssessmentError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Catalog(CatalogError::InvalidType(_)) | AppError::Answers(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Catalog(CatalogError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Scoring(ScoringError::MissingAnswer { .. }) => StatusCode::BAD_REQUEST,
            AppError::Assessment(err) if err.is_invalid_input() => StatusCode::BAD_REQUEST,
            AppError::Assessment(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Questionnaire(_)
            | AppError::Assessment(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Questionnaire(err) => write!(f, "questionnaire error: {}", err),
            AppError::Answers(err) => write!(f, "answer file error: {}", err),
            AppError::Scoring(err) => write!(f, "scoring error: {}", err),
            AppError::Catalog(err) => write!(f, "{}", err),
            AppError::Assessment(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Questionnaire(err) => Some(err),
            AppError::Answers(err) => Some(err),
            AppError::Scoring(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Assessment(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<QuestionnaireError> for AppError {
    fn from(value: QuestionnaireError) -> Self {
        Self::Questionnaire(value)
    }
}

impl From<AnswerFileError> for AppError {
    fn from(value: AnswerFileError) -> Self {
        Self::Answers(value)
    }
}

impl From<ScoringError> for AppError {
    fn from(value: ScoringError) -> Self {
        Self::Scoring(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<AssessmentError> for AppError {
    fn from(value: AssessmentError) -> Self {
        Self::Assessment(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::QuestionId;
    use crate::catalog::{lookup_report, TypeCode};
    use crate::sessions::SessionId;

    #[test]
    fn invalid_type_maps_to_bad_request() {
        let err = AppError::from(lookup_report("XXXX").expect_err("invalid"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "invalid personality type: XXXX");
    }

    #[test]
    fn missing_records_map_to_not_found() {
        let catalog = AppError::from(CatalogError::NotFound {
            type_code: TypeCode::parse("INTJ").expect("valid"),
        });
        assert_eq!(catalog.status(), StatusCode::NOT_FOUND);

        let session = AppError::from(AssessmentError::SessionNotFound(SessionId(
            "session-1".to_string(),
        )));
        assert_eq!(session.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn input_and_internal_failures_map_by_kind() {
        let missing = AppError::from(ScoringError::MissingAnswer {
            question_id: QuestionId(7),
        });
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let io = AppError::from(std::io::Error::other("disk gone"));
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(std::error::Error::source(&io).is_some());
    }

    #[tokio::test]
    async fn response_body_carries_error_message() {
        let response = AppError::from(CatalogError::NotFound {
            type_code: TypeCode::parse("ENFP").expect("valid"),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("read body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload["error"], "no catalog entry for type ENFP");
    }
}
