use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::{Questionnaire, ScoringEngine};
use crate::catalog::TypeCode;
use crate::sessions::domain::{
    AnswerItem, AnswerSession, AnswerSubmission, HistoryRecord, SessionId, ShareId, SharedResult,
    UserId,
};
use crate::sessions::repository::{
    HistoryRepository, RepositoryError, SessionRepository, ShareRepository,
};
use crate::sessions::{assessment_router, AssessmentService};

pub(super) type MemoryService = AssessmentService<MemorySessions, MemoryHistory, MemoryShares>;

pub(super) fn engine() -> Arc<ScoringEngine> {
    Arc::new(ScoringEngine::standard())
}

pub(super) fn build_service() -> (
    MemoryService,
    Arc<MemorySessions>,
    Arc<MemoryHistory>,
    Arc<MemoryShares>,
) {
    let sessions = Arc::new(MemorySessions::default());
    let history = Arc::new(MemoryHistory::default());
    let shares = Arc::new(MemoryShares::default());
    let service = AssessmentService::new(
        engine(),
        sessions.clone(),
        history.clone(),
        shares.clone(),
    );
    (service, sessions, history, shares)
}

/// Answers that push every axis fully toward `type_code`'s poles.
pub(super) fn answers_for(type_code: &str) -> Vec<AnswerItem> {
    let type_code = TypeCode::parse(type_code).expect("valid type");
    Questionnaire::standard()
        .questions()
        .iter()
        .map(|question| AnswerItem {
            question_id: question.id,
            value: if type_code.pole(question.axis) == question.positive_pole {
                5
            } else {
                1
            },
        })
        .collect()
}

pub(super) fn submission_for(type_code: &str) -> AnswerSubmission {
    AnswerSubmission {
        session_id: None,
        answers: answers_for(type_code),
    }
}

pub(super) fn midpoint_submission() -> AnswerSubmission {
    AnswerSubmission {
        session_id: None,
        answers: Questionnaire::standard()
            .questions()
            .iter()
            .map(|question| AnswerItem {
                question_id: question.id,
                value: 3,
            })
            .collect(),
    }
}

pub(super) fn user() -> UserId {
    UserId("user-42".to_string())
}

#[derive(Default, Clone)]
pub(super) struct MemorySessions {
    pub(super) records: Arc<Mutex<HashMap<SessionId, AnswerSession>>>,
}

impl SessionRepository for MemorySessions {
    fn upsert(&self, session: AnswerSession) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("session mutex poisoned");
        guard.insert(session.id.clone(), session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AnswerSession>, RepositoryError> {
        let guard = self.records.lock().expect("session mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryHistory {
    records: Arc<Mutex<Vec<HistoryRecord>>>,
}

impl MemoryHistory {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("history mutex poisoned").len()
    }
}

impl HistoryRepository for MemoryHistory {
    fn insert(&self, record: HistoryRecord) -> Result<HistoryRecord, RepositoryError> {
        self.records
            .lock()
            .expect("history mutex poisoned")
            .push(record.clone());
        Ok(record)
    }

    fn for_user(&self, user_id: &UserId) -> Result<Vec<HistoryRecord>, RepositoryError> {
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect())
    }

    fn find(
        &self,
        user_id: &UserId,
        session_id: &SessionId,
    ) -> Result<Option<HistoryRecord>, RepositoryError> {
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .find(|record| &record.user_id == user_id && &record.session_id == session_id)
            .cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryShares {
    records: Arc<Mutex<HashMap<ShareId, SharedResult>>>,
}

impl ShareRepository for MemoryShares {
    fn insert(&self, shared: SharedResult) -> Result<SharedResult, RepositoryError> {
        let mut guard = self.records.lock().expect("share mutex poisoned");
        if guard.contains_key(&shared.share_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(shared.share_id.clone(), shared.clone());
        Ok(shared)
    }

    fn fetch(&self, id: &ShareId) -> Result<Option<SharedResult>, RepositoryError> {
        let guard = self.records.lock().expect("share mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictShares;

impl ShareRepository for ConflictShares {
    fn insert(&self, _shared: SharedResult) -> Result<SharedResult, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ShareId) -> Result<Option<SharedResult>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableSessions;

impl SessionRepository for UnavailableSessions {
    fn upsert(&self, _session: AnswerSession) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<AnswerSession>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    assessment_router(Arc::new(service))
}
