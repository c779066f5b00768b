use serde::{Deserialize, Serialize};

use super::{rules, CompletionState};
use crate::workflows::onboarding::blueprint::{OnboardingBlueprint, StepGroup};
use crate::workflows::onboarding::snapshot::FormSnapshot;

/// Policy for rolling per-group progress into one overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStrategy {
    /// Flat count of complete steps over all steps, ignoring group weights.
    Unweighted,
    /// Weighted sum of group percentages using each group's completion
    /// weight, normalized by the actual weight total.
    Weighted,
}

impl OverallStrategy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unweighted => "unweighted",
            Self::Weighted => "weighted",
        }
    }
}

/// Percentage of steps in the group that evaluate `Complete`.
///
/// `Partial` deliberately contributes nothing: uploading one of three
/// documents shows as partial on the step badge but does not move the group
/// percentage until the threshold is met.
pub(crate) fn group_progress(group: &StepGroup, snapshot: &FormSnapshot) -> u8 {
    let complete = group
        .steps
        .iter()
        .filter(|step| rules::evaluate_step(step.key, snapshot) == CompletionState::Complete)
        .count();
    percentage(complete, group.steps.len())
}

pub(crate) fn overall_progress(
    blueprint: &OnboardingBlueprint,
    strategy: OverallStrategy,
    snapshot: &FormSnapshot,
) -> u8 {
    match strategy {
        OverallStrategy::Unweighted => {
            let complete = blueprint
                .steps()
                .filter(|step| {
                    rules::evaluate_step(step.key, snapshot) == CompletionState::Complete
                })
                .count();
            percentage(complete, blueprint.step_count())
        }
        OverallStrategy::Weighted => {
            let weight_total: u32 = blueprint
                .groups()
                .iter()
                .map(|group| group.completion_weight)
                .sum();
            if weight_total == 0 {
                return 0;
            }

            let weighted_sum: f64 = blueprint
                .groups()
                .iter()
                .map(|group| {
                    f64::from(group_progress(group, snapshot)) * f64::from(group.completion_weight)
                })
                .sum();

            (weighted_sum / f64::from(weight_total)).round() as u8
        }
    }
}

fn percentage(complete: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((complete as f64 * 100.0) / total as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_guards_empty_input() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 0), 0);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(1, 8), 13);
    }
}
