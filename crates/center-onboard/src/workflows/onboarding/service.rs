use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::evaluation::{CompletionState, ProgressEngine};
use super::report::OnboardingProgressReport;
use super::repository::{
    ApplicationId, OnboardingRecord, OnboardingRepository, OnboardingStatus, RepositoryError,
};
use super::snapshot::FormSnapshot;

/// Service composing the repository and the progress engine.
pub struct OnboardingService<R> {
    repository: Arc<R>,
    engine: Arc<ProgressEngine>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("onb-{id:06}"))
}

impl<R> OnboardingService<R>
where
    R: OnboardingRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: ProgressEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &ProgressEngine {
        &self.engine
    }

    /// Start a new application. Without an initial snapshot the wizard mounts
    /// on the canonical empty one, so every section is present and writable.
    pub fn create(
        &self,
        initial: Option<FormSnapshot>,
    ) -> Result<OnboardingRecord, OnboardingServiceError> {
        let now = Utc::now();
        let record = OnboardingRecord {
            application_id: next_application_id(),
            snapshot: initial.unwrap_or_else(FormSnapshot::empty),
            status: OnboardingStatus::Draft,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(record)?;
        info!(application_id = %stored.application_id.0, "onboarding application created");
        Ok(stored)
    }

    /// Apply a merge-style section patch from a wizard step.
    pub fn update_sections(
        &self,
        application_id: &ApplicationId,
        patch: FormSnapshot,
    ) -> Result<OnboardingRecord, OnboardingServiceError> {
        let mut record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        if record.status == OnboardingStatus::Submitted {
            return Err(OnboardingServiceError::AlreadySubmitted {
                application_id: application_id.clone(),
            });
        }

        record.snapshot.merge(patch);
        record.updated_at = Utc::now();
        self.repository.update(record.clone())?;
        debug!(
            application_id = %record.application_id.0,
            overall_percent = self.engine.overall_progress(&record.snapshot),
            "sections updated"
        );
        Ok(record)
    }

    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<OnboardingRecord, OnboardingServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Applications still in `Draft`, for intake dashboards.
    pub fn list_drafts(
        &self,
        limit: usize,
    ) -> Result<Vec<OnboardingRecord>, OnboardingServiceError> {
        let drafts = self.repository.drafts(limit)?;
        Ok(drafts)
    }

    /// Recompute the progress report from the stored snapshot.
    pub fn progress(
        &self,
        application_id: &ApplicationId,
    ) -> Result<OnboardingProgressReport, OnboardingServiceError> {
        let record = self.get(application_id)?;
        Ok(self.engine.report(&record.snapshot))
    }

    /// Submit the application. Submission is what completes the terminal
    /// review step, so it is gated on every required step being complete.
    pub fn submit(
        &self,
        application_id: &ApplicationId,
    ) -> Result<OnboardingRecord, OnboardingServiceError> {
        let mut record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        if record.status == OnboardingStatus::Submitted {
            return Err(OnboardingServiceError::AlreadySubmitted {
                application_id: application_id.clone(),
            });
        }

        let missing: Vec<String> = self
            .engine
            .blueprint()
            .steps()
            .filter(|step| step.required)
            .filter(|step| {
                self.engine.evaluate(step.key, &record.snapshot) != CompletionState::Complete
            })
            .map(|step| step.key.to_string())
            .collect();

        if !missing.is_empty() {
            debug!(
                application_id = %record.application_id.0,
                missing = missing.len(),
                "submission rejected"
            );
            return Err(OnboardingServiceError::IncompleteSubmission { missing });
        }

        record.status = OnboardingStatus::Submitted;
        record.updated_at = Utc::now();
        self.repository.update(record.clone())?;
        info!(application_id = %record.application_id.0, "onboarding application submitted");
        Ok(record)
    }
}

/// Error raised by the onboarding service.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("required steps incomplete: {missing:?}")]
    IncompleteSubmission { missing: Vec<String> },
    #[error("application {} was already submitted", application_id.0)]
    AlreadySubmitted { application_id: ApplicationId },
}
