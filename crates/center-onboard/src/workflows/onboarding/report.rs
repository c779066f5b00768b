use serde::Serialize;

use super::blueprint::OnboardingBlueprint;
use super::evaluation::{self, CompletionState, OverallStrategy};
use super::snapshot::FormSnapshot;

/// Completion state of a single step, rendered as a wizard badge.
#[derive(Debug, Clone, Serialize)]
pub struct StepStatusEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub state: CompletionState,
    pub state_label: &'static str,
}

/// Aggregate progress for one wizard tab.
#[derive(Debug, Clone, Serialize)]
pub struct GroupProgressEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub completed_steps: usize,
    pub total_steps: usize,
    pub percent: u8,
    pub completion_weight: u32,
    pub steps: Vec<StepStatusEntry>,
}

/// Everything the wizard chrome needs to render badges and progress bars.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingProgressReport {
    pub strategy: OverallStrategy,
    pub overall_percent: u8,
    pub groups: Vec<GroupProgressEntry>,
    /// First step, in wizard order, that is not yet complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<&'static str>,
    /// First group that has not reached 100 percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_group: Option<&'static str>,
}

pub(crate) fn build_report(
    blueprint: &OnboardingBlueprint,
    strategy: OverallStrategy,
    snapshot: &FormSnapshot,
) -> OnboardingProgressReport {
    let groups: Vec<GroupProgressEntry> = blueprint
        .groups()
        .iter()
        .map(|group| {
            let steps: Vec<StepStatusEntry> = group
                .steps
                .iter()
                .map(|step| {
                    let state = evaluation::evaluate_step(step.key, snapshot);
                    StepStatusEntry {
                        key: step.key,
                        label: step.label,
                        required: step.required,
                        state,
                        state_label: state.label(),
                    }
                })
                .collect();

            let completed_steps = steps
                .iter()
                .filter(|entry| entry.state == CompletionState::Complete)
                .count();

            GroupProgressEntry {
                id: group.id,
                label: group.label,
                completed_steps,
                total_steps: group.steps.len(),
                percent: evaluation::group_progress(group, snapshot),
                completion_weight: group.completion_weight,
                steps,
            }
        })
        .collect();

    let next_step = groups
        .iter()
        .flat_map(|group| group.steps.iter())
        .find(|entry| entry.state != CompletionState::Complete)
        .map(|entry| entry.key);

    let focus_group = groups
        .iter()
        .find(|group| group.percent < 100)
        .map(|group| group.id);

    OnboardingProgressReport {
        strategy,
        overall_percent: evaluation::overall_progress(blueprint, strategy, snapshot),
        groups,
        next_step,
        focus_group,
    }
}
