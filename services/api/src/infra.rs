use metrics_exporter_prometheus::PrometheusHandle;
use mindtype::sessions::{
    AnswerSession, HistoryRecord, HistoryRepository, RepositoryError, SessionId,
    SessionRepository, ShareId, ShareRepository, SharedResult, UserId,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn lock<'a, T>(mutex: &'a Mutex<T>, store: &str) -> Result<MutexGuard<'a, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable(format!("{store} lock poisoned")))
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, AnswerSession>>>,
}

impl SessionRepository for InMemorySessionRepository {
    fn upsert(&self, session: AnswerSession) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.records, "session store")?;
        guard.insert(session.id.clone(), session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AnswerSession>, RepositoryError> {
        let guard = lock(&self.records, "session store")?;
        Ok(guard.get(id).cloned())
    }
}

/// Records per user in insertion order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryHistoryRepository {
    records: Arc<Mutex<HashMap<UserId, Vec<HistoryRecord>>>>,
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn insert(&self, record: HistoryRecord) -> Result<HistoryRecord, RepositoryError> {
        let mut guard = lock(&self.records, "history store")?;
        guard
            .entry(record.user_id.clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    fn for_user(&self, user_id: &UserId) -> Result<Vec<HistoryRecord>, RepositoryError> {
        let guard = lock(&self.records, "history store")?;
        Ok(guard
            .get(user_id)
            .map(|records| records.iter().rev().cloned().collect())
            .unwrap_or_default())
    }

    fn find(
        &self,
        user_id: &UserId,
        session_id: &SessionId,
    ) -> Result<Option<HistoryRecord>, RepositoryError> {
        let guard = lock(&self.records, "history store")?;
        Ok(guard.get(user_id).and_then(|records| {
            records
                .iter()
                .rev()
                .find(|record| &record.session_id == session_id)
                .cloned()
        }))
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryShareRepository {
    records: Arc<Mutex<HashMap<ShareId, SharedResult>>>,
}

impl ShareRepository for InMemoryShareRepository {
    fn insert(&self, shared: SharedResult) -> Result<SharedResult, RepositoryError> {
        let mut guard = lock(&self.records, "share store")?;
        if guard.contains_key(&shared.share_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(shared.share_id.clone(), shared.clone());
        Ok(shared)
    }

    fn fetch(&self, id: &ShareId) -> Result<Option<SharedResult>, RepositoryError> {
        let guard = lock(&self.records, "share store")?;
        Ok(guard.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use mindtype::assessment::{Classification, Percentages};
    use mindtype::catalog::{report_for, ReportRecord, TypeCode};

    fn classification(code: &str) -> Classification {
        Classification::from_parts(TypeCode::parse(code).expect("valid type"), Percentages::new())
    }

    fn record(user: &str, session: &str, code: &str, minutes_ago: i64) -> HistoryRecord {
        HistoryRecord {
            user_id: UserId(user.to_string()),
            session_id: SessionId(session.to_string()),
            classification: classification(code),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    fn shared(share_id: &str) -> SharedResult {
        let type_code = TypeCode::parse("INTP").expect("valid type");
        let report: ReportRecord = *report_for(type_code).expect("report present");
        SharedResult {
            share_id: ShareId(share_id.to_string()),
            session_id: SessionId("session-a".to_string()),
            classification: classification("INTP"),
            report,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn history_lists_a_users_records_newest_first() {
        let repository = InMemoryHistoryRepository::default();
        repository
            .insert(record("ana", "s-1", "ESTJ", 30))
            .expect("insert");
        repository
            .insert(record("bo", "s-9", "ENFP", 20))
            .expect("insert");
        repository
            .insert(record("ana", "s-2", "ISTJ", 10))
            .expect("insert");

        let records = repository
            .for_user(&UserId("ana".to_string()))
            .expect("history loads");

        let sessions: Vec<&str> = records.iter().map(|r| r.session_id.0.as_str()).collect();
        assert_eq!(sessions, ["s-2", "s-1"]);
        assert!(repository
            .for_user(&UserId("nobody".to_string()))
            .expect("history loads")
            .is_empty());
    }

    #[test]
    fn find_returns_the_latest_save_of_a_session() {
        let repository = InMemoryHistoryRepository::default();
        let user = UserId("ana".to_string());
        let session = SessionId("s-1".to_string());
        repository
            .insert(record("ana", "s-1", "ESTJ", 30))
            .expect("insert");
        repository
            .insert(record("ana", "s-1", "INFP", 5))
            .expect("insert");

        let found = repository
            .find(&user, &session)
            .expect("lookup succeeds")
            .expect("record present");

        assert_eq!(found.classification.type_code().to_string(), "INFP");
        assert!(repository
            .find(&UserId("bo".to_string()), &session)
            .expect("lookup succeeds")
            .is_none());
    }

    #[test]
    fn share_insert_rejects_duplicate_ids() {
        let repository = InMemoryShareRepository::default();
        repository.insert(shared("abc123")).expect("first insert");

        assert!(matches!(
            repository.insert(shared("abc123")),
            Err(RepositoryError::Conflict)
        ));
        assert!(repository
            .fetch(&ShareId("abc123".to_string()))
            .expect("fetch succeeds")
            .is_some());
    }

    #[test]
    fn session_upsert_replaces_existing_answers() {
        let repository = InMemorySessionRepository::default();
        let id = SessionId("s-1".to_string());
        let mut answers = mindtype::assessment::AnswerSet::new();
        repository
            .upsert(AnswerSession {
                id: id.clone(),
                answers: answers.clone(),
                updated_at: Utc::now(),
            })
            .expect("upsert");
        answers.insert(
            mindtype::assessment::QuestionId(1),
            mindtype::assessment::Rating::MIDPOINT,
        );
        repository
            .upsert(AnswerSession {
                id: id.clone(),
                answers,
                updated_at: Utc::now(),
            })
            .expect("upsert");

        let stored = repository
            .fetch(&id)
            .expect("fetch succeeds")
            .expect("session present");
        assert_eq!(stored.answers.len(), 1);
    }
}
