use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};

use crate::dashboard::domain::{
    ApplicationId, ApplicationStatus, EmploymentStatus, LoanApplication, SensitiveField,
};
use crate::dashboard::repository::{ApplicationRepository, ApplicationSnapshot, RepositoryError};
use crate::dashboard::service::DashboardService;

pub(super) fn sensitive(masked: &str, value: Option<&str>) -> SensitiveField {
    SensitiveField::restricted(masked, value.map(str::to_string))
}

/// Baseline record the tests mutate per scenario. Risk score is left stale
/// on purpose; the service refreshes it from the source attributes.
pub(super) fn application(id: &str, name: &str) -> LoanApplication {
    LoanApplication {
        id: ApplicationId(id.to_string()),
        applicant_name: name.to_string(),
        email: format!(
            "{}@email.co.uk",
            name.to_lowercase().replace(' ', ".")
        ),
        amount: 50_000.0,
        status: ApplicationStatus::Pending,
        risk_score: 0.0,
        submitted_at: Utc.with_ymd_and_hms(2025, 11, 3, 9, 30, 0).single().expect("valid timestamp"),
        credit_score: 700,
        annual_income: 62_000.0,
        debt_to_income_ratio: 0.25,
        national_insurance: sensitive("QQ****54C", Some("QQ123454C")),
        date_of_birth: sensitive("**/**/19**", Some("14/03/1985")),
        bank_details: sensitive("****-****-****-1234", Some("1234-5678-9012-1234")),
        purpose: "Home Improvement".to_string(),
        term_months: 60,
        employment_status: EmploymentStatus::Employed,
    }
}

/// Small deterministic collection covering every status, with distinct
/// names and amounts so filter/sort scenarios have something to bite on.
pub(super) fn sample_set() -> Vec<LoanApplication> {
    let mut emma = application("APP-2025-00001", "Emma Taylor");
    emma.amount = 250_000.0;
    emma.status = ApplicationStatus::Approved;
    emma.credit_score = 790;

    let mut james = application("APP-2025-00002", "James Smith");
    james.amount = 10_000.0;
    james.status = ApplicationStatus::Approved;
    james.credit_score = 810;

    let mut sophie = application("APP-2025-00003", "Sophie Brown");
    sophie.amount = 480_000.0;
    sophie.status = ApplicationStatus::Pending;
    sophie.credit_score = 410;
    sophie.debt_to_income_ratio = 0.55;

    let mut oliver = application("APP-2025-00004", "Oliver Davies");
    oliver.amount = 95_000.0;
    oliver.status = ApplicationStatus::Rejected;
    oliver.credit_score = 340;
    oliver.debt_to_income_ratio = 0.72;

    let mut charlotte = application("APP-2025-00005", "Charlotte Wilson");
    charlotte.amount = 95_000.0;
    charlotte.status = ApplicationStatus::UnderReview;
    charlotte.credit_score = 655;

    let mut thomas = application("APP-2025-00006", "Thomas Evans");
    thomas.amount = 32_000.0;
    thomas.status = ApplicationStatus::Approved;
    thomas.credit_score = 720;

    vec![emma, james, sophie, oliver, charlotte, thomas]
}

pub(super) enum RepositoryMode {
    Pending,
    Ready(Vec<LoanApplication>),
    Failing(String),
}

/// In-memory repository used across the module tests.
pub(super) struct MemoryRepository {
    mode: Mutex<RepositoryMode>,
}

impl MemoryRepository {
    pub(super) fn pending() -> Self {
        Self {
            mode: Mutex::new(RepositoryMode::Pending),
        }
    }

    pub(super) fn ready(applications: Vec<LoanApplication>) -> Self {
        Self {
            mode: Mutex::new(RepositoryMode::Ready(applications)),
        }
    }

    pub(super) fn failing(reason: &str) -> Self {
        Self {
            mode: Mutex::new(RepositoryMode::Failing(reason.to_string())),
        }
    }
}

impl ApplicationRepository for MemoryRepository {
    fn snapshot(&self) -> Result<ApplicationSnapshot, RepositoryError> {
        let mode = self.mode.lock().expect("repository mutex poisoned");
        match &*mode {
            RepositoryMode::Pending => Ok(ApplicationSnapshot::Pending),
            RepositoryMode::Ready(applications) => {
                Ok(ApplicationSnapshot::Ready(applications.clone()))
            }
            RepositoryMode::Failing(reason) => Err(RepositoryError::Unavailable(reason.clone())),
        }
    }
}

pub(super) fn service_over(
    applications: Vec<LoanApplication>,
) -> DashboardService<MemoryRepository> {
    DashboardService::new(Arc::new(MemoryRepository::ready(applications)))
}
