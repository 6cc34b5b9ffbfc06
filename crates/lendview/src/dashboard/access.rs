use serde::{Deserialize, Serialize};

use super::domain::SensitiveField;

/// Reviewer role supplied by the surrounding session layer. The dashboard
/// trusts it as-is; there is no credential check here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    LoanOfficer,
    SeniorOfficer,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            UserRole::LoanOfficer => "LOAN_OFFICER",
            UserRole::SeniorOfficer => "SENIOR_OFFICER",
        }
    }
}

impl Default for UserRole {
    /// Least privilege when the caller does not say who is asking.
    fn default() -> Self {
        UserRole::LoanOfficer
    }
}

/// Resolves the display form of a sensitive field for the given role.
///
/// Loan officers always receive the masked stand-in, even when the raw
/// value happens to be populated in memory: possession of the value never
/// implies display authorization. Senior officers receive the raw value
/// when present, falling back to the mask when the repository withheld it
/// server-side (a data-availability gap, not an access violation).
pub fn resolve_field(field: &SensitiveField, role: UserRole) -> &str {
    match role {
        UserRole::SeniorOfficer => field.value.as_deref().unwrap_or(&field.masked),
        UserRole::LoanOfficer => &field.masked,
    }
}
