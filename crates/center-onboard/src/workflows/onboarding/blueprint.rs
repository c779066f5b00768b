use std::collections::HashSet;

use serde::Serialize;

/// One atomic unit of data entry with its own completion predicate.
#[derive(Debug, Clone, Serialize)]
pub struct StepDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
}

/// Ordered collection of steps presented together as a wizard tab.
///
/// `completion_weight` is the group's share of overall progress under the
/// weighted strategy, expressed in points out of 100.
#[derive(Debug, Clone, Serialize)]
pub struct StepGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub steps: Vec<StepDefinition>,
    pub completion_weight: u32,
}

/// Step/group table driving every wizard variant.
///
/// All validation happens here, at configuration load time. The evaluator and
/// aggregators stay total: a blueprint that constructs successfully can be
/// queried with any key and any snapshot without failing.
#[derive(Debug)]
pub struct OnboardingBlueprint {
    groups: Vec<StepGroup>,
}

impl OnboardingBlueprint {
    pub fn new(groups: Vec<StepGroup>) -> Result<Self, BlueprintError> {
        let mut seen = HashSet::new();
        let mut weight_total: u32 = 0;

        for group in &groups {
            if group.steps.is_empty() {
                return Err(BlueprintError::EmptyGroup {
                    group: group.id.to_string(),
                });
            }
            weight_total += group.completion_weight;
            for step in &group.steps {
                if !seen.insert(step.key) {
                    return Err(BlueprintError::DuplicateStepKey {
                        key: step.key.to_string(),
                    });
                }
            }
        }

        if weight_total != 100 {
            return Err(BlueprintError::WeightSum { found: weight_total });
        }

        Ok(Self { groups })
    }

    /// The standard treatment center wizard: eleven data-entry steps across
    /// five tabs. The terminal review step is intentionally absent; its
    /// completion is the submission itself, not a field-presence predicate.
    pub fn standard() -> Self {
        Self::new(standard_step_groups()).expect("standard blueprint is valid")
    }

    pub fn groups(&self) -> &[StepGroup] {
        &self.groups
    }

    pub fn step_count(&self) -> usize {
        self.groups.iter().map(|group| group.steps.len()).sum()
    }

    pub fn steps(&self) -> impl Iterator<Item = &StepDefinition> {
        self.groups.iter().flat_map(|group| group.steps.iter())
    }

    pub fn find_step(&self, key: &str) -> Option<&StepDefinition> {
        self.steps().find(|step| step.key == key)
    }
}

fn standard_step_groups() -> Vec<StepGroup> {
    vec![
        StepGroup {
            id: "company_profile",
            label: "Company Profile",
            completion_weight: 25,
            steps: vec![
                StepDefinition {
                    key: "company_info",
                    label: "Company Information",
                    required: true,
                },
                StepDefinition {
                    key: "business_classification",
                    label: "Business Classification",
                    required: true,
                },
                StepDefinition {
                    key: "contacts",
                    label: "Contacts",
                    required: true,
                },
            ],
        },
        StepGroup {
            id: "ownership_references",
            label: "Ownership & References",
            completion_weight: 15,
            steps: vec![
                StepDefinition {
                    key: "ownership",
                    label: "Ownership",
                    required: true,
                },
                StepDefinition {
                    key: "references",
                    label: "Business References",
                    required: false,
                },
            ],
        },
        StepGroup {
            id: "financial_legal",
            label: "Financial & Legal",
            completion_weight: 30,
            steps: vec![
                StepDefinition {
                    key: "payment_banking",
                    label: "Payment & Banking",
                    required: true,
                },
                StepDefinition {
                    key: "licenses",
                    label: "Licenses & Certifications",
                    required: true,
                },
                StepDefinition {
                    key: "financial_assessment",
                    label: "Financial Assessment",
                    required: false,
                },
            ],
        },
        StepGroup {
            id: "documents_authorizations",
            label: "Documents & Authorizations",
            completion_weight: 20,
            steps: vec![
                StepDefinition {
                    key: "documents",
                    label: "Supporting Documents",
                    required: true,
                },
                StepDefinition {
                    key: "authorizations",
                    label: "Authorizations",
                    required: true,
                },
            ],
        },
        StepGroup {
            id: "purchasing",
            label: "Purchasing Preferences",
            completion_weight: 10,
            steps: vec![StepDefinition {
                key: "purchasing_preferences",
                label: "Purchasing Preferences",
                required: false,
            }],
        },
    ]
}

/// Configuration-time validation failures. Distinct from the runtime
/// evaluation path, which never fails.
#[derive(Debug, thiserror::Error)]
pub enum BlueprintError {
    #[error("step key '{key}' appears in more than one group")]
    DuplicateStepKey { key: String },
    #[error("group '{group}' has no steps")]
    EmptyGroup { group: String },
    #[error("group completion weights must sum to 100, found {found}")]
    WeightSum { found: u32 },
}
