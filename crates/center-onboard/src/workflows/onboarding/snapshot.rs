use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Full, possibly partially-filled, in-memory representation of one onboarding
/// application at a point in time.
///
/// Every section is optional: absence of a section is distinct from a section
/// that is present with empty fields. Step predicates tolerate both without
/// failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_info: Option<CompanyInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_info: Option<BusinessInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Contacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership: Option<Ownership>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<References>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_info: Option<PaymentInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Licenses>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Documents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorizations: Option<Authorizations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchasing_preferences: Option<PurchasingPreferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_assessment: Option<FinancialAssessment>,
}

impl FormSnapshot {
    /// Canonical empty snapshot created at wizard mount: every section present
    /// with empty fields, so step components can write into their section
    /// without initializing it first.
    pub fn empty() -> Self {
        Self {
            company_info: Some(CompanyInfo::default()),
            business_info: Some(BusinessInfo::default()),
            contacts: Some(Contacts::default()),
            ownership: Some(Ownership::default()),
            references: Some(References::default()),
            payment_info: Some(PaymentInfo::default()),
            licenses: Some(Licenses::default()),
            documents: Some(Documents::default()),
            authorizations: Some(Authorizations::default()),
            purchasing_preferences: Some(PurchasingPreferences::default()),
            financial_assessment: Some(FinancialAssessment::default()),
        }
    }

    /// Merge-style update used by wizard steps: sections present in the patch
    /// replace the stored section wholesale, absent sections are left alone.
    pub fn merge(&mut self, patch: FormSnapshot) {
        if patch.company_info.is_some() {
            self.company_info = patch.company_info;
        }
        if patch.business_info.is_some() {
            self.business_info = patch.business_info;
        }
        if patch.contacts.is_some() {
            self.contacts = patch.contacts;
        }
        if patch.ownership.is_some() {
            self.ownership = patch.ownership;
        }
        if patch.references.is_some() {
            self.references = patch.references;
        }
        if patch.payment_info.is_some() {
            self.payment_info = patch.payment_info;
        }
        if patch.licenses.is_some() {
            self.licenses = patch.licenses;
        }
        if patch.documents.is_some() {
            self.documents = patch.documents;
        }
        if patch.authorizations.is_some() {
            self.authorizations = patch.authorizations;
        }
        if patch.purchasing_preferences.is_some() {
            self.purchasing_preferences = patch.purchasing_preferences;
        }
        if patch.financial_assessment.is_some() {
            self.financial_assessment = patch.financial_assessment;
        }
    }
}

/// Legal identity of the center.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dba_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federal_tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Classification answers collected on the business profile step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    #[serde(default)]
    pub business_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_in_operation: Option<String>,
    #[serde(default)]
    pub service_lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<ContactCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_contact: Option<ContactCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ownership {
    #[serde(default)]
    pub principal_owners: Vec<PrincipalOwner>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrincipalOwner {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_percent: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct References {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_bank: Option<BankReference>,
    #[serde(default)]
    pub trade_references: Vec<TradeReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeReference {
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_routing_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Licenses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dea_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_license_number: Option<String>,
}

/// Upload flags for the fixed document checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documents {
    #[serde(default)]
    pub voided_check: bool,
    #[serde(default)]
    pub resale_tax_exemption_cert: bool,
    #[serde(default)]
    pub financial_statements: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorizations {
    #[serde(default)]
    pub terms_accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_signature: Option<SignatureBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasingPreferences {
    #[serde(default)]
    pub preferred_purchasing_methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpo_affiliation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialAssessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_revenue_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_spend: Option<String>,
}
