use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::access::UserRole;
use super::domain::{ApplicationId, LoanApplication};
use super::query::{query, QueryParams};
use super::repository::{ApplicationRepository, RepositoryError};
use super::risk::{with_refreshed_risk, DEFAULT_ANNUAL_RATE};
use super::summary::{summarize, SummaryView};
use super::views::{detail_view, row_view, ApplicationDetailView, ApplicationRowView};

/// Whether the table reflects a materialized snapshot or an upstream fetch
/// still in flight. Lets callers tell "no data loaded yet" apart from
/// "zero matches".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataState {
    Pending,
    Ready,
}

/// Display-ready table page plus the pre-pagination match count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub rows: Vec<ApplicationRowView>,
    pub total_matched: usize,
    pub data_state: DataState,
}

/// Facade composing the repository snapshot with the pure core: query
/// pipeline, risk scoring, field access policy, and summary aggregation.
///
/// Every operation re-reads the snapshot and recomputes from scratch; the
/// service holds no derived state that a role switch or parameter change
/// could leave stale.
pub struct DashboardService<R> {
    repository: Arc<R>,
    annual_rate: f64,
}

impl<R> DashboardService<R>
where
    R: ApplicationRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_annual_rate(repository, DEFAULT_ANNUAL_RATE)
    }

    pub fn with_annual_rate(repository: Arc<R>, annual_rate: f64) -> Self {
        Self {
            repository,
            annual_rate,
        }
    }

    /// Pulls one consistent snapshot and refreshes each record's cached
    /// risk score from its source attributes.
    fn load(&self) -> Result<(Vec<LoanApplication>, DataState), DashboardServiceError> {
        let snapshot = self.repository.snapshot()?;
        let data_state = if snapshot.is_pending() {
            DataState::Pending
        } else {
            DataState::Ready
        };
        let applications = snapshot
            .applications()
            .iter()
            .map(with_refreshed_risk)
            .collect();
        Ok((applications, data_state))
    }

    /// Runs the filter/sort/paginate pipeline and projects display rows.
    pub fn table(&self, params: &QueryParams) -> Result<TableView, DashboardServiceError> {
        let (applications, data_state) = self.load()?;
        let result = query(&applications, params);
        debug!(
            total = applications.len(),
            matched = result.total_matched,
            page = result.page.len(),
            "table query evaluated"
        );
        Ok(TableView {
            rows: result.page.iter().map(row_view).collect(),
            total_matched: result.total_matched,
            data_state,
        })
    }

    /// Resolves a single application for detail display under `role`.
    pub fn detail(
        &self,
        id: &ApplicationId,
        role: UserRole,
    ) -> Result<ApplicationDetailView, DashboardServiceError> {
        let (applications, _) = self.load()?;
        applications
            .iter()
            .find(|application| &application.id == id)
            .map(|application| detail_view(application, role, self.annual_rate))
            .ok_or_else(|| DashboardServiceError::NotFound(id.clone()))
    }

    /// Summary card aggregates for the reporting date `today`.
    pub fn summary(&self, today: NaiveDate) -> Result<SummaryView, DashboardServiceError> {
        let (applications, _) = self.load()?;
        Ok(summarize(&applications, today))
    }
}

/// Error raised by the dashboard service.
#[derive(Debug, thiserror::Error)]
pub enum DashboardServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("application '{}' not found", (.0).0)]
    NotFound(ApplicationId),
}
