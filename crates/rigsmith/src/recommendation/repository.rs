use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::facade::RecommendationResult;
use super::questionnaire::BuildProfile;
use super::synergy::Grade;

/// Identifier wrapper for stored build sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Stored pairing of the validated profile and the recommendation produced for it.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRecord {
    pub session_id: SessionId,
    pub created_at: DateTime<Utc>,
    pub profile: BuildProfile,
    pub result: RecommendationResult,
}

impl RecommendationRecord {
    pub fn session_view(&self) -> BuildSessionView {
        BuildSessionView {
            session_id: self.session_id.clone(),
            created_at: self.created_at,
            grade: self.result.synergy.grade,
            score: self.result.synergy.score,
            profile: self.result.synergy.profile.clone(),
            valid: self.result.valid,
            recommendation: self.result.clone(),
        }
    }
}

/// Storage abstraction so the session service can be exercised in isolation.
pub trait RecommendationRepository: Send + Sync {
    fn insert(&self, record: RecommendationRecord)
        -> Result<RecommendationRecord, RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<RecommendationRecord>, RepositoryError>;
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

/// Response body for a stored session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSessionView {
    pub session_id: SessionId,
    pub created_at: DateTime<Utc>,
    pub grade: Grade,
    pub score: u8,
    pub profile: String,
    pub valid: bool,
    pub recommendation: RecommendationResult,
}
