mod progress;
mod rules;

pub use progress::OverallStrategy;

use serde::{Deserialize, Serialize};

use super::blueprint::OnboardingBlueprint;
use super::report::{self, OnboardingProgressReport};
use super::snapshot::FormSnapshot;

/// Three-valued result of evaluating a step against a snapshot.
///
/// Only `Complete` counts toward any percentage; `Partial` surfaces on the
/// step badge but never moves a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionState {
    Complete,
    Incomplete,
    Partial,
}

impl CompletionState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Incomplete => "Incomplete",
            Self::Partial => "Partial",
        }
    }
}

/// Stateless progress model shared by every wizard variant: step predicates,
/// group aggregation, and the overall rollup, driven by one blueprint.
#[derive(Debug)]
pub struct ProgressEngine {
    blueprint: OnboardingBlueprint,
    strategy: OverallStrategy,
}

impl ProgressEngine {
    pub fn new(blueprint: OnboardingBlueprint, strategy: OverallStrategy) -> Self {
        Self {
            blueprint,
            strategy,
        }
    }

    /// Engine over the standard treatment center wizard.
    pub fn standard(strategy: OverallStrategy) -> Self {
        Self::new(OnboardingBlueprint::standard(), strategy)
    }

    pub fn blueprint(&self) -> &OnboardingBlueprint {
        &self.blueprint
    }

    pub fn strategy(&self) -> OverallStrategy {
        self.strategy
    }

    /// Evaluate a single step. Unknown keys evaluate `Incomplete`.
    pub fn evaluate(&self, step_key: &str, snapshot: &FormSnapshot) -> CompletionState {
        rules::evaluate_step(step_key, snapshot)
    }

    /// Integer percentage of complete steps in the named group, 0 for
    /// unknown group ids.
    pub fn group_progress(&self, group_id: &str, snapshot: &FormSnapshot) -> u8 {
        self.blueprint
            .groups()
            .iter()
            .find(|group| group.id == group_id)
            .map_or(0, |group| progress::group_progress(group, snapshot))
    }

    /// Overall percentage under the engine's configured strategy.
    pub fn overall_progress(&self, snapshot: &FormSnapshot) -> u8 {
        progress::overall_progress(&self.blueprint, self.strategy, snapshot)
    }

    /// Full serializable report: per-step states, per-group percentages,
    /// overall rollup, and a next-step hint.
    pub fn report(&self, snapshot: &FormSnapshot) -> OnboardingProgressReport {
        report::build_report(&self.blueprint, self.strategy, snapshot)
    }
}

pub(crate) use progress::{group_progress, overall_progress};
pub(crate) use rules::evaluate_step;
