use super::domain::LoanApplication;

/// One materialized read of the upstream application collection.
///
/// The fetch collaborator is asynchronous; `Pending` is a valid state the
/// dashboard treats as an empty collection, never as an error. Snapshots
/// are handed over by value so a query always evaluates against one
/// consistent collection even if a refresh lands mid-flight.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationSnapshot {
    Pending,
    Ready(Vec<LoanApplication>),
}

impl ApplicationSnapshot {
    pub fn applications(&self) -> &[LoanApplication] {
        match self {
            ApplicationSnapshot::Pending => &[],
            ApplicationSnapshot::Ready(applications) => applications,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ApplicationSnapshot::Pending)
    }
}

/// Storage abstraction so the dashboard service can be exercised in
/// isolation. Real deployments back this with the origination system;
/// tests and the demo use an in-memory implementation.
pub trait ApplicationRepository: Send + Sync {
    fn snapshot(&self) -> Result<ApplicationSnapshot, RepositoryError>;
}

/// Error enumeration for repository failures. An unavailable upstream is
/// surfaced to the presentation layer as a distinct error state rather
/// than swallowed; retry is the fetch collaborator's concern.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
