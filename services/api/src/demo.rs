use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use center_onboard::error::AppError;
use center_onboard::workflows::onboarding::snapshot::{
    Authorizations, BankReference, BusinessInfo, CompanyInfo, ContactCard, Contacts, Documents,
    FinancialAssessment, FormSnapshot, Licenses, Ownership, PaymentInfo, PrincipalOwner,
    PurchasingPreferences, References, SignatureBlock,
};
use center_onboard::workflows::onboarding::{
    OnboardingProgressReport, OnboardingService, OverallStrategy, ProgressEngine,
};

use crate::infra::{load_snapshot, InMemoryOnboardingRepository};

#[derive(Args, Debug)]
pub(crate) struct ProgressReportArgs {
    /// Path to a saved form snapshot (JSON). Defaults to an empty snapshot.
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
    /// Overall progress strategy: 'weighted' or 'unweighted'
    #[arg(long, default_value = "weighted", value_parser = crate::infra::parse_strategy)]
    pub(crate) strategy: OverallStrategy,
    /// Include every step badge in the output, not just group totals
    #[arg(long)]
    pub(crate) list_steps: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Overall progress strategy: 'weighted' or 'unweighted'
    #[arg(long, default_value = "weighted", value_parser = crate::infra::parse_strategy)]
    pub(crate) strategy: OverallStrategy,
}

pub(crate) fn run_progress_report(args: ProgressReportArgs) -> Result<(), AppError> {
    let ProgressReportArgs {
        snapshot,
        strategy,
        list_steps,
    } = args;

    let snapshot = match snapshot {
        Some(path) => load_snapshot(&path)?,
        None => FormSnapshot::empty(),
    };

    let engine = ProgressEngine::standard(strategy);
    let report = engine.report(&snapshot);
    render_report(&report, list_steps);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { strategy } = args;

    println!("Treatment center onboarding walk-through ({})", strategy.label());

    let repository = Arc::new(InMemoryOnboardingRepository::default());
    let service = OnboardingService::new(repository, ProgressEngine::standard(strategy));

    let record = service.create(None)?;
    println!("\nCreated application {}", record.application_id.0);
    let report = service.progress(&record.application_id)?;
    render_report(&report, false);

    println!("\nStage 1: company profile");
    let record = service.update_sections(&record.application_id, company_profile_patch())?;
    let report = service.progress(&record.application_id)?;
    render_report(&report, false);

    match service.submit(&record.application_id) {
        Ok(_) => println!("\nUnexpectedly accepted an incomplete submission"),
        Err(err) => println!("\nEarly submission rejected: {}", err),
    }

    println!("\nStage 2: ownership, banking, and licensure");
    let record = service.update_sections(&record.application_id, financial_patch())?;
    let report = service.progress(&record.application_id)?;
    render_report(&report, false);

    println!("\nStage 3: documents, authorizations, and preferences");
    let record = service.update_sections(&record.application_id, closing_patch())?;
    let report = service.progress(&record.application_id)?;
    render_report(&report, true);

    let submitted = service.submit(&record.application_id)?;
    println!(
        "\nSubmitted application {} -> status {}",
        submitted.application_id.0,
        submitted.status.label()
    );

    Ok(())
}

fn render_report(report: &OnboardingProgressReport, list_steps: bool) {
    println!("Overall progress: {}%", report.overall_percent);
    for group in &report.groups {
        println!(
            "- {}: {}% ({}/{} steps, weight {})",
            group.label, group.percent, group.completed_steps, group.total_steps,
            group.completion_weight
        );
        if list_steps {
            for step in &group.steps {
                let required = if step.required { "required" } else { "optional" };
                println!("    - {} [{}]: {}", step.label, required, step.state_label);
            }
        }
    }
    if let Some(next_step) = report.next_step {
        println!("Next step: {}", next_step);
    }
    if let Some(focus_group) = report.focus_group {
        println!("Focus group: {}", focus_group);
    }
}

fn company_profile_patch() -> FormSnapshot {
    FormSnapshot {
        company_info: Some(CompanyInfo {
            legal_name: Some("Prairie Ridge Treatment Center LLC".to_string()),
            dba_name: Some("Prairie Ridge Recovery".to_string()),
            federal_tax_id: Some("42-1234567".to_string()),
            business_phone: Some("515-555-0164".to_string()),
            address: Some("1200 Grand Ave, Des Moines, IA 50309".to_string()),
        }),
        business_info: Some(BusinessInfo {
            business_type: vec!["Residential treatment".to_string()],
            years_in_operation: Some("6-10 years".to_string()),
            service_lines: vec!["Detox".to_string(), "Outpatient counseling".to_string()],
        }),
        contacts: Some(Contacts {
            primary_contact: Some(ContactCard {
                name: Some("Dana Whitfield".to_string()),
                title: Some("Operations Director".to_string()),
                email: Some("dana.whitfield@prairieridge.example".to_string()),
                phone: Some("515-555-0188".to_string()),
            }),
            billing_contact: None,
        }),
        ..FormSnapshot::default()
    }
}

fn financial_patch() -> FormSnapshot {
    FormSnapshot {
        ownership: Some(Ownership {
            principal_owners: vec![PrincipalOwner {
                name: "Dana Whitfield".to_string(),
                ownership_percent: Some(60.0),
            }],
        }),
        references: Some(References {
            primary_bank: Some(BankReference {
                name: Some("Hawkeye Community Bank".to_string()),
                contact_phone: Some("515-555-0102".to_string()),
            }),
            trade_references: Vec::new(),
        }),
        payment_info: Some(PaymentInfo {
            bank_name: Some("Hawkeye Community Bank".to_string()),
            bank_routing_number: Some("073000545".to_string()),
            bank_account_number: Some("0042117788".to_string()),
            payment_terms: Some("Net 30".to_string()),
        }),
        licenses: Some(Licenses {
            dea_number: Some("FW1234563".to_string()),
            medical_license: None,
            state_license_number: Some("IA-TX-5521".to_string()),
        }),
        financial_assessment: Some(FinancialAssessment {
            annual_revenue_range: Some("$5M-$10M".to_string()),
            estimated_monthly_spend: Some("$25,000".to_string()),
        }),
        ..FormSnapshot::default()
    }
}

fn closing_patch() -> FormSnapshot {
    FormSnapshot {
        documents: Some(Documents {
            voided_check: true,
            resale_tax_exemption_cert: true,
            financial_statements: true,
        }),
        authorizations: Some(Authorizations {
            terms_accepted: true,
            authorized_signature: Some(SignatureBlock {
                name: Some("Dana Whitfield".to_string()),
                title: Some("Operations Director".to_string()),
                signed_on: None,
            }),
        }),
        purchasing_preferences: Some(PurchasingPreferences {
            preferred_purchasing_methods: vec!["Online portal".to_string()],
            gpo_affiliation: None,
        }),
        ..FormSnapshot::default()
    }
}
