use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use center_onboard::error::AppError;
use center_onboard::workflows::onboarding::{
    ApplicationId, FormSnapshot, OnboardingRecord, OnboardingRepository, OnboardingStatus,
    OverallStrategy, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryOnboardingRepository {
    records: Arc<Mutex<BTreeMap<ApplicationId, OnboardingRecord>>>,
}

impl OnboardingRepository for InMemoryOnboardingRepository {
    fn insert(&self, record: OnboardingRecord) -> Result<OnboardingRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.application_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: OnboardingRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.application_id) {
            guard.insert(record.application_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<OnboardingRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn drafts(&self, limit: usize) -> Result<Vec<OnboardingRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == OnboardingStatus::Draft)
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Read a saved form snapshot from disk for offline reporting.
pub(crate) fn load_snapshot(path: &Path) -> Result<FormSnapshot, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let snapshot = serde_json::from_str(&raw)?;
    Ok(snapshot)
}

/// clap value parser for the overall progress strategy.
pub(crate) fn parse_strategy(value: &str) -> Result<OverallStrategy, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "weighted" => Ok(OverallStrategy::Weighted),
        "unweighted" | "flat" => Ok(OverallStrategy::Unweighted),
        other => Err(format!("unknown strategy '{other}', expected 'weighted' or 'unweighted'")),
    }
}
