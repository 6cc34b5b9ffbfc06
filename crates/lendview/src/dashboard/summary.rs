use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationStatus, LoanApplication};

/// Headline aggregates for the dashboard summary cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub total_applications: usize,
    pub pending_count: usize,
    pub approved_today: usize,
    pub total_value: f64,
}

/// Computes the summary aggregates over one snapshot. `today` is passed
/// explicitly so reports are reproducible in tests and demos.
pub fn summarize(applications: &[LoanApplication], today: NaiveDate) -> SummaryView {
    let pending_count = applications
        .iter()
        .filter(|application| application.status == ApplicationStatus::Pending)
        .count();

    let approved_today = applications
        .iter()
        .filter(|application| {
            application.status == ApplicationStatus::Approved
                && application.submitted_at.date_naive() == today
        })
        .count();

    let total_value = applications
        .iter()
        .map(|application| application.amount)
        .sum();

    SummaryView {
        total_applications: applications.len(),
        pending_count,
        approved_today,
        total_value,
    }
}
