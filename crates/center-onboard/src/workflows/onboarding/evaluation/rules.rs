use super::CompletionState;
use crate::workflows::onboarding::snapshot::FormSnapshot;

/// Evaluate one step's completion predicate against the current snapshot.
///
/// Total over its whole input domain: unknown keys and missing sections
/// evaluate to `Incomplete` rather than failing, so a misconfigured wizard
/// degrades to "nothing done" instead of crashing.
pub(crate) fn evaluate_step(key: &str, snapshot: &FormSnapshot) -> CompletionState {
    match key {
        "company_info" => {
            let section = snapshot.company_info.as_ref();
            state(
                section.map_or(false, |info| {
                    has_text(&info.legal_name) && has_text(&info.federal_tax_id)
                }),
            )
        }
        "business_classification" => state(
            snapshot
                .business_info
                .as_ref()
                .map_or(false, |info| !info.business_type.is_empty()),
        ),
        "contacts" => state(snapshot.contacts.as_ref().map_or(false, |contacts| {
            contacts
                .primary_contact
                .as_ref()
                .map_or(false, |primary| has_text(&primary.name) && has_text(&primary.email))
        })),
        "ownership" => state(
            snapshot
                .ownership
                .as_ref()
                .map_or(false, |ownership| !ownership.principal_owners.is_empty()),
        ),
        "references" => state(snapshot.references.as_ref().map_or(false, |references| {
            references
                .primary_bank
                .as_ref()
                .map_or(false, |bank| has_text(&bank.name))
        })),
        "payment_banking" => state(snapshot.payment_info.as_ref().map_or(false, |payment| {
            has_text(&payment.bank_name) && has_text(&payment.bank_routing_number)
        })),
        "licenses" => state(snapshot.licenses.as_ref().map_or(false, |licenses| {
            has_text(&licenses.dea_number) || has_text(&licenses.medical_license)
        })),
        "documents" => {
            let uploaded = snapshot.documents.as_ref().map_or(0, |documents| {
                [
                    documents.voided_check,
                    documents.resale_tax_exemption_cert,
                    documents.financial_statements,
                ]
                .iter()
                .filter(|flag| **flag)
                .count()
            });
            match uploaded {
                0 => CompletionState::Incomplete,
                1 => CompletionState::Partial,
                _ => CompletionState::Complete,
            }
        }
        "authorizations" => state(snapshot.authorizations.as_ref().map_or(false, |auth| {
            auth.terms_accepted
                && auth
                    .authorized_signature
                    .as_ref()
                    .map_or(false, |signature| has_text(&signature.name))
        })),
        "purchasing_preferences" => state(
            snapshot
                .purchasing_preferences
                .as_ref()
                .map_or(false, |prefs| !prefs.preferred_purchasing_methods.is_empty()),
        ),
        "financial_assessment" => state(
            snapshot
                .financial_assessment
                .as_ref()
                .map_or(false, |assessment| has_text(&assessment.annual_revenue_range)),
        ),
        // The terminal review step is completed by submission, never by
        // field presence.
        "review" => CompletionState::Incomplete,
        _ => CompletionState::Incomplete,
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |text| !text.is_empty())
}

fn state(complete: bool) -> CompletionState {
    if complete {
        CompletionState::Complete
    } else {
        CompletionState::Incomplete
    }
}
