//! Loan application review dashboard core.
//!
//! Three pieces carry the real logic: the risk scoring engine ([`risk`]),
//! the role-gated field access policy ([`access`]), and the table query
//! pipeline ([`query`]). [`service`] composes them over a repository
//! snapshot; [`router`] exposes the read-only HTTP surface.

pub mod access;
pub mod domain;
pub mod query;
pub mod repository;
pub mod risk;
pub mod router;
pub mod service;
pub mod summary;
pub mod views;

#[cfg(test)]
mod tests;

pub use access::{resolve_field, UserRole};
pub use domain::{
    ApplicationId, ApplicationStatus, EmploymentStatus, LoanApplication, SensitiveField,
};
pub use query::{
    query, QueryParams, QueryResult, SortDirection, SortKey, SortState, StatusFilter,
};
pub use repository::{ApplicationRepository, ApplicationSnapshot, RepositoryError};
pub use risk::{
    calculate_risk_score, monthly_payment, with_refreshed_risk, RiskBreakdown, RiskCalculation,
    RiskCategory, RiskFactor, DEFAULT_ANNUAL_RATE,
};
pub use router::dashboard_router;
pub use service::{DashboardService, DashboardServiceError, DataState, TableView};
pub use summary::{summarize, SummaryView};
pub use views::{detail_view, row_view, ApplicationDetailView, ApplicationRowView};
