use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for loan applications, stable across refetches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Review status assigned by the upstream origination system. The dashboard
/// only reads it, it never transitions an application itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    UnderReview,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Approved => "APPROVED",
            ApplicationStatus::Rejected => "REJECTED",
            ApplicationStatus::UnderReview => "UNDER_REVIEW",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(ApplicationStatus::Pending),
            "APPROVED" => Some(ApplicationStatus::Approved),
            "REJECTED" => Some(ApplicationStatus::Rejected),
            "UNDER_REVIEW" => Some(ApplicationStatus::UnderReview),
            _ => None,
        }
    }
}

/// Declared employment situation of the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
}

/// A personal attribute requiring role-gated disclosure.
///
/// `masked` is always present and is a non-reversible display stand-in.
/// `value` is populated only when the holder is entitled to the raw form;
/// the repository may have nulled it server-side already. Display must go
/// through [`crate::dashboard::access::resolve_field`] either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitiveField {
    pub masked: String,
    pub value: Option<String>,
    pub is_restricted: bool,
}

impl SensitiveField {
    pub fn restricted(masked: impl Into<String>, value: Option<String>) -> Self {
        Self {
            masked: masked.into(),
            value,
            is_restricted: true,
        }
    }
}

/// One loan application as delivered by the repository snapshot.
///
/// Records are immutable once fetched; a refresh replaces them wholesale.
/// `risk_score` is derived from the financial attributes and cached on the
/// record; [`crate::dashboard::risk::with_refreshed_risk`] produces a
/// replacement record when the cache is stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub id: ApplicationId,
    pub applicant_name: String,
    pub email: String,
    pub amount: f64,
    pub status: ApplicationStatus,
    pub risk_score: f64,
    pub submitted_at: DateTime<Utc>,
    pub credit_score: u16,
    pub annual_income: f64,
    pub debt_to_income_ratio: f64,
    pub national_insurance: SensitiveField,
    pub date_of_birth: SensitiveField,
    pub bank_details: SensitiveField,
    pub purpose: String,
    pub term_months: u32,
    pub employment_status: EmploymentStatus,
}
