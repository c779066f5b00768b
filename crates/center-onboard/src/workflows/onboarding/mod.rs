//! Treatment center onboarding wizard: form snapshot, completion/progress
//! model, and the intake surfaces built on top of it.

mod blueprint;
pub mod evaluation;
mod report;
pub mod repository;
pub mod router;
pub mod service;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use blueprint::{BlueprintError, OnboardingBlueprint, StepDefinition, StepGroup};
pub use evaluation::{CompletionState, OverallStrategy, ProgressEngine};
pub use report::{GroupProgressEntry, OnboardingProgressReport, StepStatusEntry};
pub use repository::{
    ApplicationId, ApplicationStatusView, OnboardingRecord, OnboardingRepository, OnboardingStatus,
    RepositoryError,
};
pub use router::onboarding_router;
pub use service::{OnboardingService, OnboardingServiceError};
pub use snapshot::FormSnapshot;
