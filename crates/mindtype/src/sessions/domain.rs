use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assessment::{AnswerSet, Classification, QuestionId};
use crate::catalog::{ReportRecord, TypeCode};
use crate::compare::DriftReport;

/// Identifier of a (possibly partial) answer session.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

/// Opaque owner of saved results; identity checks happen upstream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ShareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored answers for one respondent sitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSession {
    pub id: SessionId,
    pub answers: AnswerSet,
    pub updated_at: DateTime<Utc>,
}

/// Raw answer as submitted; validated by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerItem {
    pub question_id: QuestionId,
    pub value: u8,
}

/// Save request; replaces the session's answers wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    #[serde(default)]
    pub session_id: Option<SessionId>,
    pub answers: Vec<AnswerItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub session_id: SessionId,
    pub saved: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionResult {
    pub session_id: SessionId,
    #[serde(flatten)]
    pub classification: Classification,
}

/// A scored session archived under a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub user_id: UserId,
    pub session_id: SessionId,
    #[serde(flatten)]
    pub classification: Classification,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            session_id: self.session_id.clone(),
            type_code: self.classification.type_code(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    pub session_id: SessionId,
    #[serde(rename = "type")]
    pub type_code: TypeCode,
    pub created_at: DateTime<Utc>,
}

/// Re-test comparison between two archived results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryComparison {
    pub result_a: HistorySummary,
    pub result_b: HistorySummary,
    #[serde(flatten)]
    pub drift: DriftReport,
}

/// Frozen snapshot exposed through a share link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedResult {
    pub share_id: ShareId,
    pub session_id: SessionId,
    #[serde(flatten)]
    pub classification: Classification,
    pub report: ReportRecord,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareReceipt {
    pub share_id: ShareId,
    pub share_url: String,
}
