use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use tracing::info;

use super::catalog::CatalogRepository;
use super::facade::{RecommendationEngine, RecommendationError};
use super::questionnaire::{BuildProfile, QuestionnaireAnswers};
use super::repository::{
    RecommendationRecord, RecommendationRepository, RepositoryError, SessionId,
};

/// Service that runs the engine for each submission and keeps the outcome.
pub struct BuildSessionService<C, R> {
    engine: Arc<RecommendationEngine<C>>,
    repository: Arc<R>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("build-{id:06}"))
}

impl<C, R> BuildSessionService<C, R>
where
    C: CatalogRepository + 'static,
    R: RecommendationRepository + 'static,
{
    pub fn new(engine: Arc<RecommendationEngine<C>>, repository: Arc<R>) -> Self {
        Self { engine, repository }
    }

    pub fn engine(&self) -> &RecommendationEngine<C> {
        &self.engine
    }

    /// Run the engine against today's date and store the result.
    pub fn submit(
        &self,
        answers: &QuestionnaireAnswers,
    ) -> Result<RecommendationRecord, BuildSessionError> {
        self.submit_on(answers, Local::now().date_naive())
    }

    pub fn submit_on(
        &self,
        answers: &QuestionnaireAnswers,
        today: NaiveDate,
    ) -> Result<RecommendationRecord, BuildSessionError> {
        let profile = BuildProfile::try_from(answers).map_err(RecommendationError::from)?;
        let result = self
            .engine
            .recommend_profile(&profile, today, &mut rand::thread_rng())?;

        let record = RecommendationRecord {
            session_id: next_session_id(),
            created_at: Utc::now(),
            profile,
            result,
        };

        let stored = self.repository.insert(record)?;
        info!(
            session_id = %stored.session_id.0,
            grade = stored.result.synergy.grade.letter(),
            "build session stored"
        );
        Ok(stored)
    }

    /// Fetch a stored session for API responses.
    pub fn get(&self, session_id: &SessionId) -> Result<RecommendationRecord, BuildSessionError> {
        let record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the session service.
#[derive(Debug, thiserror::Error)]
pub enum BuildSessionError {
    #[error(transparent)]
    Engine(#[from] RecommendationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
