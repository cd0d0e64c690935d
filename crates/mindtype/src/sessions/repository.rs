use super::domain::{
    AnswerSession, HistoryRecord, SessionId, ShareId, SharedResult, UserId,
};

/// Answer-session storage so the service can be exercised in isolation.
pub trait SessionRepository: Send + Sync {
    /// Inserts or replaces the session with the same id.
    fn upsert(&self, session: AnswerSession) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<AnswerSession>, RepositoryError>;
}

/// Per-user archive of scored results.
pub trait HistoryRepository: Send + Sync {
    fn insert(&self, record: HistoryRecord) -> Result<HistoryRecord, RepositoryError>;
    /// Newest first.
    fn for_user(&self, user_id: &UserId) -> Result<Vec<HistoryRecord>, RepositoryError>;
    fn find(
        &self,
        user_id: &UserId,
        session_id: &SessionId,
    ) -> Result<Option<HistoryRecord>, RepositoryError>;
}

/// Snapshots published through share links.
pub trait ShareRepository: Send + Sync {
    fn insert(&self, shared: SharedResult) -> Result<SharedResult, RepositoryError>;
    fn fetch(&self, id: &ShareId) -> Result<Option<SharedResult>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
