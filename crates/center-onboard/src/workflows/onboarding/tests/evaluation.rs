use super::common::*;
use crate::workflows::onboarding::snapshot::{
    Authorizations, CompanyInfo, ContactCard, Contacts, Documents, FormSnapshot, Licenses,
    SignatureBlock,
};
use crate::workflows::onboarding::CompletionState;

#[test]
fn evaluate_is_idempotent_for_a_fixed_snapshot() {
    let engine = weighted_engine();
    let snapshot = complete_snapshot();

    for step in engine.blueprint().steps().collect::<Vec<_>>() {
        let first = engine.evaluate(step.key, &snapshot);
        let second = engine.evaluate(step.key, &snapshot);
        assert_eq!(first, second, "step {} should be deterministic", step.key);
    }
}

#[test]
fn unknown_step_keys_evaluate_incomplete() {
    let engine = weighted_engine();
    let snapshot = complete_snapshot();

    assert_eq!(
        engine.evaluate("no_such_step", &snapshot),
        CompletionState::Incomplete
    );
    assert_eq!(engine.evaluate("", &snapshot), CompletionState::Incomplete);
}

#[test]
fn review_never_completes_via_field_presence() {
    let engine = weighted_engine();
    assert_eq!(
        engine.evaluate("review", &complete_snapshot()),
        CompletionState::Incomplete
    );
}

#[test]
fn company_info_requires_legal_name_and_tax_id() {
    let engine = weighted_engine();

    let mut snapshot = FormSnapshot::empty();
    snapshot.company_info = Some(CompanyInfo {
        legal_name: Some("Acme".to_string()),
        federal_tax_id: Some(String::new()),
        ..CompanyInfo::default()
    });
    assert_eq!(
        engine.evaluate("company_info", &snapshot),
        CompletionState::Incomplete
    );

    snapshot.company_info = Some(CompanyInfo {
        legal_name: Some("Acme".to_string()),
        federal_tax_id: Some("42-7654321".to_string()),
        ..CompanyInfo::default()
    });
    assert_eq!(
        engine.evaluate("company_info", &snapshot),
        CompletionState::Complete
    );
}

#[test]
fn missing_sections_evaluate_incomplete_without_panicking() {
    let engine = weighted_engine();
    let snapshot = FormSnapshot::default();

    for step in engine.blueprint().steps().collect::<Vec<_>>() {
        assert_eq!(
            engine.evaluate(step.key, &snapshot),
            CompletionState::Incomplete,
            "step {} over absent sections",
            step.key
        );
    }
}

#[test]
fn contacts_requires_primary_name_and_email() {
    let engine = weighted_engine();
    let mut snapshot = FormSnapshot::empty();

    snapshot.contacts = Some(Contacts {
        primary_contact: Some(ContactCard {
            name: Some("Dana Whitfield".to_string()),
            email: None,
            ..ContactCard::default()
        }),
        billing_contact: None,
    });
    assert_eq!(
        engine.evaluate("contacts", &snapshot),
        CompletionState::Incomplete
    );

    snapshot.contacts = Some(contacts());
    assert_eq!(
        engine.evaluate("contacts", &snapshot),
        CompletionState::Complete
    );
}

#[test]
fn licenses_accepts_either_dea_or_medical_license() {
    let engine = weighted_engine();
    let mut snapshot = FormSnapshot::empty();

    snapshot.licenses = Some(Licenses {
        dea_number: None,
        medical_license: Some("MD-44821".to_string()),
        state_license_number: None,
    });
    assert_eq!(
        engine.evaluate("licenses", &snapshot),
        CompletionState::Complete
    );

    snapshot.licenses = Some(Licenses::default());
    assert_eq!(
        engine.evaluate("licenses", &snapshot),
        CompletionState::Incomplete
    );
}

#[test]
fn documents_threshold_drives_three_states() {
    let engine = weighted_engine();
    let mut snapshot = FormSnapshot::empty();

    snapshot.documents = Some(Documents::default());
    assert_eq!(
        engine.evaluate("documents", &snapshot),
        CompletionState::Incomplete
    );

    snapshot.documents = Some(Documents {
        voided_check: true,
        ..Documents::default()
    });
    assert_eq!(
        engine.evaluate("documents", &snapshot),
        CompletionState::Partial
    );

    snapshot.documents = Some(Documents {
        voided_check: true,
        financial_statements: true,
        ..Documents::default()
    });
    assert_eq!(
        engine.evaluate("documents", &snapshot),
        CompletionState::Complete
    );

    snapshot.documents = Some(all_documents());
    assert_eq!(
        engine.evaluate("documents", &snapshot),
        CompletionState::Complete
    );
}

#[test]
fn authorizations_requires_terms_and_signature_name() {
    let engine = weighted_engine();
    let mut snapshot = FormSnapshot::empty();

    snapshot.authorizations = Some(Authorizations {
        terms_accepted: true,
        authorized_signature: Some(SignatureBlock::default()),
    });
    assert_eq!(
        engine.evaluate("authorizations", &snapshot),
        CompletionState::Incomplete
    );

    snapshot.authorizations = Some(Authorizations {
        terms_accepted: false,
        authorized_signature: Some(SignatureBlock {
            name: Some("Dana Whitfield".to_string()),
            ..SignatureBlock::default()
        }),
    });
    assert_eq!(
        engine.evaluate("authorizations", &snapshot),
        CompletionState::Incomplete
    );

    snapshot.authorizations = Some(authorizations());
    assert_eq!(
        engine.evaluate("authorizations", &snapshot),
        CompletionState::Complete
    );
}

#[test]
fn list_backed_steps_require_non_empty_lists() {
    let engine = weighted_engine();
    let empty = FormSnapshot::empty();

    assert_eq!(
        engine.evaluate("business_classification", &empty),
        CompletionState::Incomplete
    );
    assert_eq!(
        engine.evaluate("ownership", &empty),
        CompletionState::Incomplete
    );
    assert_eq!(
        engine.evaluate("purchasing_preferences", &empty),
        CompletionState::Incomplete
    );

    let filled = complete_snapshot();
    assert_eq!(
        engine.evaluate("business_classification", &filled),
        CompletionState::Complete
    );
    assert_eq!(
        engine.evaluate("ownership", &filled),
        CompletionState::Complete
    );
    assert_eq!(
        engine.evaluate("purchasing_preferences", &filled),
        CompletionState::Complete
    );
}

#[test]
fn remaining_predicates_match_their_fields() {
    let engine = weighted_engine();
    let empty = FormSnapshot::empty();
    let filled = complete_snapshot();

    for key in ["references", "payment_banking", "financial_assessment"] {
        assert_eq!(
            engine.evaluate(key, &empty),
            CompletionState::Incomplete,
            "{key} over empty sections"
        );
        assert_eq!(
            engine.evaluate(key, &filled),
            CompletionState::Complete,
            "{key} over filled sections"
        );
    }
}
