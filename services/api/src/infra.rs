use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use lendview::dashboard::{
    ApplicationId, ApplicationRepository, ApplicationSnapshot, ApplicationStatus, EmploymentStatus,
    LoanApplication, RepositoryError, SensitiveField,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory repository backing the service and the CLI demo. Real
/// deployments swap this for the origination system client.
pub(crate) struct InMemoryApplicationRepository {
    applications: Vec<LoanApplication>,
}

impl InMemoryApplicationRepository {
    pub(crate) fn seeded() -> Self {
        Self {
            applications: sample_applications(),
        }
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn snapshot(&self) -> Result<ApplicationSnapshot, RepositoryError> {
        Ok(ApplicationSnapshot::Ready(self.applications.clone()))
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

struct Fixture {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    amount: f64,
    status: ApplicationStatus,
    submitted: (i32, u32, u32),
    credit_score: u16,
    annual_income: f64,
    dti: f64,
    ni: (&'static str, &'static str),
    dob: (&'static str, &'static str),
    purpose: &'static str,
    term_months: u32,
    employment: EmploymentStatus,
}

const FIXTURES: &[Fixture] = &[
    Fixture {
        id: "APP-2025-00001",
        name: "James Smith",
        email: "james.smith@email.co.uk",
        amount: 500_000.0,
        status: ApplicationStatus::Pending,
        submitted: (2025, 10, 14),
        credit_score: 305,
        annual_income: 41_000.0,
        dti: 0.58,
        ni: ("JS****21A", "JS430921A"),
        dob: ("**/**/19**", "21/02/1968"),
        purpose: "Home Purchase",
        term_months: 120,
        employment: EmploymentStatus::SelfEmployed,
    },
    Fixture {
        id: "APP-2025-00002",
        name: "Emma Jones",
        email: "emma.jones@email.co.uk",
        amount: 10_000.0,
        status: ApplicationStatus::Approved,
        submitted: (2025, 10, 20),
        credit_score: 812,
        annual_income: 74_500.0,
        dti: 0.12,
        ni: ("EJ****03B", "EJ118203B"),
        dob: ("**/**/19**", "05/09/1990"),
        purpose: "Vehicle Purchase",
        term_months: 24,
        employment: EmploymentStatus::Employed,
    },
    Fixture {
        id: "APP-2025-00003",
        name: "Oliver Williams",
        email: "oliver.williams@email.co.uk",
        amount: 185_000.0,
        status: ApplicationStatus::UnderReview,
        submitted: (2025, 10, 22),
        credit_score: 640,
        annual_income: 52_000.0,
        dti: 0.38,
        ni: ("OW****76C", "OW552376C"),
        dob: ("**/**/19**", "17/06/1982"),
        purpose: "Business Expansion",
        term_months: 84,
        employment: EmploymentStatus::SelfEmployed,
    },
    Fixture {
        id: "APP-2025-00004",
        name: "Sophie Brown",
        email: "sophie.brown@email.co.uk",
        amount: 42_000.0,
        status: ApplicationStatus::Approved,
        submitted: (2025, 10, 27),
        credit_score: 735,
        annual_income: 61_000.0,
        dti: 0.22,
        ni: ("SB****48D", "SB906148D"),
        dob: ("**/**/19**", "30/11/1987"),
        purpose: "Debt Consolidation",
        term_months: 60,
        employment: EmploymentStatus::Employed,
    },
    Fixture {
        id: "APP-2025-00005",
        name: "William Taylor",
        email: "william.taylor@email.co.uk",
        amount: 320_000.0,
        status: ApplicationStatus::Rejected,
        submitted: (2025, 10, 18),
        credit_score: 388,
        annual_income: 29_000.0,
        dti: 0.67,
        ni: ("WT****59E", "WT271459E"),
        dob: ("**/**/19**", "09/01/1975"),
        purpose: "Home Purchase",
        term_months: 120,
        employment: EmploymentStatus::Unemployed,
    },
    Fixture {
        id: "APP-2025-00006",
        name: "Charlotte Davies",
        email: "charlotte.davies@email.co.uk",
        amount: 68_000.0,
        status: ApplicationStatus::Pending,
        submitted: (2025, 10, 26),
        credit_score: 701,
        annual_income: 66_000.0,
        dti: 0.29,
        ni: ("CD****33F", "CD684233F"),
        dob: ("**/**/19**", "12/04/1993"),
        purpose: "Home Improvement",
        term_months: 48,
        employment: EmploymentStatus::Employed,
    },
    Fixture {
        id: "APP-2025-00007",
        name: "Thomas Wilson",
        email: "thomas.wilson@email.co.uk",
        amount: 15_500.0,
        status: ApplicationStatus::Approved,
        submitted: (2025, 10, 27),
        credit_score: 768,
        annual_income: 55_000.0,
        dti: 0.18,
        ni: ("TW****90G", "TW347590G"),
        dob: ("**/**/19**", "25/08/1984"),
        purpose: "Education",
        term_months: 36,
        employment: EmploymentStatus::Employed,
    },
    Fixture {
        id: "APP-2025-00008",
        name: "Emily Evans",
        email: "emily.evans@email.co.uk",
        amount: 230_000.0,
        status: ApplicationStatus::UnderReview,
        submitted: (2025, 10, 25),
        credit_score: 590,
        annual_income: 47_000.0,
        dti: 0.44,
        ni: ("EE****17H", "EE805617H"),
        dob: ("**/**/19**", "03/12/1979"),
        purpose: "Home Purchase",
        term_months: 120,
        employment: EmploymentStatus::SelfEmployed,
    },
];

/// Deterministic fixture snapshot. Risk scores are left at zero; the
/// dashboard service recomputes them from the source attributes on load.
pub(crate) fn sample_applications() -> Vec<LoanApplication> {
    FIXTURES
        .iter()
        .map(|fixture| {
            let (year, month, day) = fixture.submitted;
            LoanApplication {
                id: ApplicationId(fixture.id.to_string()),
                applicant_name: fixture.name.to_string(),
                email: fixture.email.to_string(),
                amount: fixture.amount,
                status: fixture.status,
                risk_score: 0.0,
                submitted_at: Utc
                    .with_ymd_and_hms(year, month, day, 9, 0, 0)
                    .single()
                    .expect("valid fixture timestamp"),
                credit_score: fixture.credit_score,
                annual_income: fixture.annual_income,
                debt_to_income_ratio: fixture.dti,
                national_insurance: SensitiveField::restricted(
                    fixture.ni.0,
                    Some(fixture.ni.1.to_string()),
                ),
                date_of_birth: SensitiveField::restricted(
                    fixture.dob.0,
                    Some(fixture.dob.1.to_string()),
                ),
                bank_details: SensitiveField::restricted(
                    "****-****-****-1234",
                    Some("1234-5678-9012-1234".to_string()),
                ),
                purpose: fixture.purpose.to_string(),
                term_months: fixture.term_months,
                employment_status: fixture.employment,
            }
        })
        .collect()
}
