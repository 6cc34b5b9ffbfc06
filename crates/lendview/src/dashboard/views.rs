use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::access::{resolve_field, UserRole};
use super::domain::{ApplicationId, ApplicationStatus, EmploymentStatus, LoanApplication};
use super::risk::{calculate_risk_score, monthly_payment, RiskCalculation};

/// One table row. Carries no sensitive fields at all, so nothing in the
/// table path can leak them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRowView {
    pub id: ApplicationId,
    pub applicant_name: String,
    pub email: String,
    pub amount: f64,
    pub risk_score: f64,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
    pub purpose: String,
}

pub fn row_view(application: &LoanApplication) -> ApplicationRowView {
    ApplicationRowView {
        id: application.id.clone(),
        applicant_name: application.applicant_name.clone(),
        email: application.email.clone(),
        amount: application.amount,
        risk_score: application.risk_score,
        status: application.status,
        submitted_at: application.submitted_at,
        purpose: application.purpose.clone(),
    }
}

/// Single-application detail, with every sensitive field already resolved
/// through the access policy for the requesting role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetailView {
    pub id: ApplicationId,
    pub applicant_name: String,
    pub email: String,
    pub purpose: String,
    pub amount: f64,
    pub term_months: u32,
    pub status: ApplicationStatus,
    pub employment_status: EmploymentStatus,
    pub submitted_at: DateTime<Utc>,
    pub annual_income: f64,
    pub monthly_payment: Option<f64>,
    pub national_insurance: String,
    pub date_of_birth: String,
    pub bank_details: String,
    pub risk: RiskCalculation,
}

/// Builds the detail view for one application under the given role.
///
/// The role is threaded in explicitly at every call site; views are built
/// fresh per request, so a role switch can never observe output rendered
/// for the previous role.
pub fn detail_view(
    application: &LoanApplication,
    role: UserRole,
    annual_rate: f64,
) -> ApplicationDetailView {
    ApplicationDetailView {
        id: application.id.clone(),
        applicant_name: application.applicant_name.clone(),
        email: application.email.clone(),
        purpose: application.purpose.clone(),
        amount: application.amount,
        term_months: application.term_months,
        status: application.status,
        employment_status: application.employment_status,
        submitted_at: application.submitted_at,
        annual_income: application.annual_income,
        monthly_payment: monthly_payment(application.amount, application.term_months, annual_rate),
        national_insurance: resolve_field(&application.national_insurance, role).to_string(),
        date_of_birth: resolve_field(&application.date_of_birth, role).to_string(),
        bank_details: resolve_field(&application.bank_details, role).to_string(),
        risk: calculate_risk_score(application),
    }
}
