use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::snapshot::FormSnapshot;

/// Identifier wrapper for onboarding applications. Sequential ids sort in
/// creation order, which keeps map-backed listings stable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Lifecycle of one onboarding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    Draft,
    Submitted,
}

impl OnboardingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            OnboardingStatus::Draft => "draft",
            OnboardingStatus::Submitted => "submitted",
        }
    }
}

/// Repository record holding the snapshot and lifecycle metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingRecord {
    pub application_id: ApplicationId,
    pub snapshot: FormSnapshot,
    pub status: OnboardingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OnboardingRecord {
    pub fn status_view(&self, overall_percent: u8) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.application_id.clone(),
            status: self.status.label(),
            overall_percent,
            updated_at: self.updated_at,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
/// Snapshot persistence itself (database, schema) is an external collaborator.
pub trait OnboardingRepository: Send + Sync {
    fn insert(&self, record: OnboardingRecord) -> Result<OnboardingRecord, RepositoryError>;
    fn update(&self, record: OnboardingRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<OnboardingRecord>, RepositoryError>;
    fn drafts(&self, limit: usize) -> Result<Vec<OnboardingRecord>, RepositoryError>;
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

/// Sanitized representation of an application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub status: &'static str,
    pub overall_percent: u8,
    pub updated_at: DateTime<Utc>,
}
