use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::onboarding::repository::{
    ApplicationId, OnboardingRecord, OnboardingRepository, RepositoryError,
};
use crate::workflows::onboarding::snapshot::{
    Authorizations, BankReference, BusinessInfo, CompanyInfo, ContactCard, Contacts, Documents,
    FinancialAssessment, FormSnapshot, Licenses, Ownership, PaymentInfo, PrincipalOwner,
    PurchasingPreferences, References, SignatureBlock,
};
use crate::workflows::onboarding::{OnboardingService, OverallStrategy, ProgressEngine};

pub(super) fn company_info() -> CompanyInfo {
    CompanyInfo {
        legal_name: Some("Prairie Ridge Treatment Center LLC".to_string()),
        dba_name: Some("Prairie Ridge".to_string()),
        federal_tax_id: Some("42-1234567".to_string()),
        business_phone: Some("515-555-0117".to_string()),
        address: Some("400 Locust St, Des Moines, IA".to_string()),
    }
}

pub(super) fn business_info() -> BusinessInfo {
    BusinessInfo {
        business_type: vec!["residential_treatment".to_string()],
        years_in_operation: Some("6-10".to_string()),
        service_lines: vec!["detox".to_string(), "outpatient".to_string()],
    }
}

pub(super) fn contacts() -> Contacts {
    Contacts {
        primary_contact: Some(ContactCard {
            name: Some("Dana Whitfield".to_string()),
            title: Some("Director of Operations".to_string()),
            email: Some("dana.whitfield@prairieridge.example".to_string()),
            phone: Some("515-555-0142".to_string()),
        }),
        billing_contact: None,
    }
}

pub(super) fn ownership() -> Ownership {
    Ownership {
        principal_owners: vec![PrincipalOwner {
            name: "Dana Whitfield".to_string(),
            ownership_percent: Some(60.0),
        }],
    }
}

pub(super) fn references() -> References {
    References {
        primary_bank: Some(BankReference {
            name: Some("Community State Bank".to_string()),
            contact_phone: Some("515-555-0183".to_string()),
        }),
        trade_references: Vec::new(),
    }
}

pub(super) fn payment_info() -> PaymentInfo {
    PaymentInfo {
        bank_name: Some("Community State Bank".to_string()),
        bank_routing_number: Some("073000228".to_string()),
        bank_account_number: Some("000123456789".to_string()),
        payment_terms: Some("net_30".to_string()),
    }
}

pub(super) fn licenses() -> Licenses {
    Licenses {
        dea_number: Some("FW1234563".to_string()),
        medical_license: None,
        state_license_number: Some("IA-TX-0081".to_string()),
    }
}

pub(super) fn all_documents() -> Documents {
    Documents {
        voided_check: true,
        resale_tax_exemption_cert: true,
        financial_statements: true,
    }
}

pub(super) fn authorizations() -> Authorizations {
    Authorizations {
        terms_accepted: true,
        authorized_signature: Some(SignatureBlock {
            name: Some("Dana Whitfield".to_string()),
            title: Some("Director of Operations".to_string()),
            signed_on: chrono::NaiveDate::from_ymd_opt(2025, 11, 3),
        }),
    }
}

pub(super) fn purchasing_preferences() -> PurchasingPreferences {
    PurchasingPreferences {
        preferred_purchasing_methods: vec!["purchase_order".to_string()],
        gpo_affiliation: None,
    }
}

pub(super) fn financial_assessment() -> FinancialAssessment {
    FinancialAssessment {
        annual_revenue_range: Some("1m_5m".to_string()),
        estimated_monthly_spend: Some("10k_25k".to_string()),
    }
}

/// Snapshot where every step in the standard blueprint evaluates `Complete`.
pub(super) fn complete_snapshot() -> FormSnapshot {
    FormSnapshot {
        company_info: Some(company_info()),
        business_info: Some(business_info()),
        contacts: Some(contacts()),
        ownership: Some(ownership()),
        references: Some(references()),
        payment_info: Some(payment_info()),
        licenses: Some(licenses()),
        documents: Some(all_documents()),
        authorizations: Some(authorizations()),
        purchasing_preferences: Some(purchasing_preferences()),
        financial_assessment: Some(financial_assessment()),
    }
}

pub(super) fn weighted_engine() -> ProgressEngine {
    ProgressEngine::standard(OverallStrategy::Weighted)
}

pub(super) fn unweighted_engine() -> ProgressEngine {
    ProgressEngine::standard(OverallStrategy::Unweighted)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<BTreeMap<ApplicationId, OnboardingRecord>>>,
}

impl OnboardingRepository for MemoryRepository {
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
            .filter(|record| {
                record.status == crate::workflows::onboarding::OnboardingStatus::Draft
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl OnboardingRepository for UnavailableRepository {
    fn insert(&self, _record: OnboardingRecord) -> Result<OnboardingRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn update(&self, _record: OnboardingRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<OnboardingRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn drafts(&self, _limit: usize) -> Result<Vec<OnboardingRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<OnboardingService<MemoryRepository>>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(OnboardingService::new(
        repository.clone(),
        weighted_engine(),
    ));
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body streams");
    serde_json::from_slice(&bytes).expect("body is json")
}
