//! Answer sessions, per-user result history, and share links over the scoring engine.
//!
//! Storage sits behind the repository traits so the HTTP layer and tests can swap backends.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerItem, AnswerSession, AnswerSubmission, HistoryComparison, HistoryRecord,
    HistorySummary, SessionId, SessionResult, ShareId, ShareReceipt, SharedResult,
    SubmissionReceipt, UserId,
};
pub use repository::{HistoryRepository, RepositoryError, SessionRepository, ShareRepository};
pub use router::assessment_router;
pub use service::{AssessmentError, AssessmentService, DEFAULT_SHARE_BASE_PATH};
