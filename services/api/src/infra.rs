use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use rigsmith::recommendation::{
    CatalogError, ComponentCatalog, RecommendationRecord, RecommendationRepository,
    RepositoryError, SessionId,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRecommendationRepository {
    records: Arc<Mutex<HashMap<SessionId, RecommendationRecord>>>,
}

impl InMemoryRecommendationRepository {
    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<SessionId, RecommendationRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl RecommendationRepository for InMemoryRecommendationRepository {
    fn insert(
        &self,
        record: RecommendationRecord,
    ) -> Result<RecommendationRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<RecommendationRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }
}

/// Catalog from a CSV file when a path is given, otherwise the built-in reference table.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<ComponentCatalog, CatalogError> {
    match path {
        Some(path) => {
            let catalog = ComponentCatalog::from_csv_path(path)?;
            info!(path = %path.display(), components = catalog.len(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(ComponentCatalog::reference()),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
