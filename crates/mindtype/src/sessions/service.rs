use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use super::domain::{
    AnswerItem, AnswerSession, AnswerSubmission, HistoryComparison, HistoryRecord, SessionId,
    SessionResult, ShareId, ShareReceipt, SharedResult, SubmissionReceipt, UserId,
};
use super::repository::{HistoryRepository, RepositoryError, SessionRepository, ShareRepository};
use crate::assessment::{
    AnswerSet, Classification, InvalidRating, QuestionId, Questionnaire, Rating, ScoringEngine,
    ScoringError,
};
use crate::catalog::{report_for, CatalogError};
use crate::compare::axis_drift;

pub const DEFAULT_SHARE_BASE_PATH: &str = "/share";

/// Service composing the scoring engine with session, history, and share storage.
pub struct AssessmentService<S, H, L> {
    engine: Arc<ScoringEngine>,
    sessions: Arc<S>,
    history: Arc<H>,
    shares: Arc<L>,
    share_base_path: String,
}

const SHARE_ID_LEN: usize = 16;

/// Random v4 id; the id is the only key to a respondent's answers.
fn next_session_id() -> SessionId {
    SessionId(Uuid::new_v4().to_string())
}

/// Leading hex digits of a random v4 id.
fn next_share_id() -> ShareId {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(SHARE_ID_LEN);
    ShareId(id)
}

impl<S, H, L> AssessmentService<S, H, L>
where
    S: SessionRepository + 'static,
    H: HistoryRepository + 'static,
    L: ShareRepository + 'static,
{
    pub fn new(
        engine: Arc<ScoringEngine>,
        sessions: Arc<S>,
        history: Arc<H>,
        shares: Arc<L>,
    ) -> Self {
        Self {
            engine,
            sessions,
            history,
            shares,
            share_base_path: DEFAULT_SHARE_BASE_PATH.to_string(),
        }
    }

    /// Prefix for issued share URLs, without a trailing slash.
    pub fn with_share_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.share_base_path = base_path.into();
        self
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        self.engine.questionnaire()
    }

    /// Validate and store answers, replacing whatever the session held before.
    pub fn submit(
        &self,
        submission: AnswerSubmission,
    ) -> Result<SubmissionReceipt, AssessmentError> {
        let answers = self.validate(&submission.answers)?;
        let session_id = submission.session_id.unwrap_or_else(next_session_id);
        let saved = answers.len();

        self.sessions.upsert(AnswerSession {
            id: session_id.clone(),
            answers,
            updated_at: Utc::now(),
        })?;

        debug!(session_id = %session_id, saved, "stored answers");
        Ok(SubmissionReceipt { session_id, saved })
    }

    /// Score a session once every question has a rating.
    pub fn result(&self, session_id: &SessionId) -> Result<SessionResult, AssessmentError> {
        let classification = self.classify(session_id)?;
        Ok(SessionResult {
            session_id: session_id.clone(),
            classification,
        })
    }

    pub fn save_to_history(
        &self,
        user_id: &UserId,
        session_id: &SessionId,
    ) -> Result<HistoryRecord, AssessmentError> {
        let classification = self.classify(session_id)?;
        let record = self.history.insert(HistoryRecord {
            user_id: user_id.clone(),
            session_id: session_id.clone(),
            classification,
            created_at: Utc::now(),
        })?;

        info!(
            user_id = %record.user_id,
            session_id = %record.session_id,
            type_code = %record.classification.type_code(),
            "saved result to history"
        );
        Ok(record)
    }

    /// Saved results for a user, newest first.
    pub fn history(&self, user_id: &UserId) -> Result<Vec<HistoryRecord>, AssessmentError> {
        Ok(self.history.for_user(user_id)?)
    }

    /// Axis drift from `session_a` to `session_b`, both of which must be saved for the user.
    pub fn compare_history(
        &self,
        user_id: &UserId,
        session_a: &SessionId,
        session_b: &SessionId,
    ) -> Result<HistoryComparison, AssessmentError> {
        let before = self.saved(user_id, session_a)?;
        let after = self.saved(user_id, session_b)?;

        Ok(HistoryComparison {
            result_a: before.summary(),
            result_b: after.summary(),
            drift: axis_drift(&before.classification, &after.classification),
        })
    }

    /// Freeze the session's result and report under a new share id.
    pub fn share(&self, session_id: &SessionId) -> Result<ShareReceipt, AssessmentError> {
        let classification = self.classify(session_id)?;
        let report = *report_for(classification.type_code())?;

        let stored = self.shares.insert(SharedResult {
            share_id: next_share_id(),
            session_id: session_id.clone(),
            classification,
            report,
            created_at: Utc::now(),
        })?;

        let share_url = format!("{}/{}", self.share_base_path, stored.share_id);
        info!(share_id = %stored.share_id, session_id = %session_id, "issued share link");
        Ok(ShareReceipt {
            share_id: stored.share_id,
            share_url,
        })
    }

    pub fn shared(&self, share_id: &ShareId) -> Result<SharedResult, AssessmentError> {
        self.shares
            .fetch(share_id)?
            .ok_or_else(|| AssessmentError::ShareNotFound(share_id.clone()))
    }

    fn validate(&self, items: &[AnswerItem]) -> Result<AnswerSet, AssessmentError> {
        let questionnaire = self.engine.questionnaire();
        let mut answers = AnswerSet::new();
        for item in items {
            if !questionnaire.contains(item.question_id) {
                return Err(AssessmentError::UnknownQuestion(item.question_id));
            }
            let rating =
                Rating::new(item.value).map_err(|source| AssessmentError::InvalidRating {
                    question_id: item.question_id,
                    source,
                })?;
            answers.insert(item.question_id, rating);
        }
        Ok(answers)
    }

    fn classify(&self, session_id: &SessionId) -> Result<Classification, AssessmentError> {
        let session = self
            .sessions
            .fetch(session_id)?
            .ok_or_else(|| AssessmentError::SessionNotFound(session_id.clone()))?;

        let questionnaire = self.engine.questionnaire();
        let required = questionnaire.len();
        let answered = required - session.answers.missing(questionnaire).len();
        if answered < required {
            return Err(AssessmentError::IncompleteAnswers { answered, required });
        }

        Ok(self.engine.score(&session.answers)?)
    }

    fn saved(
        &self,
        user_id: &UserId,
        session_id: &SessionId,
    ) -> Result<HistoryRecord, AssessmentError> {
        self.history
            .find(user_id, session_id)?
            .ok_or_else(|| AssessmentError::HistoryNotFound(session_id.clone()))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("only {answered} of {required} questions answered")]
    IncompleteAnswers { answered: usize, required: usize },
    #[error("session {0} not found")]
    SessionNotFound(SessionId),
    #[error("no saved result for session {0}")]
    HistoryNotFound(SessionId),
    #[error("share {0} not found")]
    ShareNotFound(ShareId),
    #[error("question {question_id}: {source}")]
    InvalidRating {
        question_id: QuestionId,
        source: InvalidRating,
    },
    #[error("question {0} is not part of the questionnaire")]
    UnknownQuestion(QuestionId),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AssessmentError {
    /// Whether the failure is caused by the caller's input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::IncompleteAnswers { .. }
                | Self::InvalidRating { .. }
                | Self::UnknownQuestion(_)
                | Self::Catalog(CatalogError::InvalidType(_))
        )
    }

    /// Whether the failure is a lookup against an id that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SessionNotFound(_)
                | Self::HistoryNotFound(_)
                | Self::ShareNotFound(_)
                | Self::Repository(RepositoryError::NotFound)
                | Self::Catalog(CatalogError::NotFound { .. })
        )
    }
}
