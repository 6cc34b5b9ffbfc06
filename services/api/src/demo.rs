use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use clap::Args;
use lendview::dashboard::{
    DashboardService, QueryParams, SortKey, SortState, StatusFilter, UserRole,
};
use lendview::error::AppError;

use crate::infra::{parse_date, InMemoryApplicationRepository};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Status filter (PENDING, APPROVED, REJECTED, UNDER_REVIEW, or ALL)
    #[arg(long, default_value = "ALL", value_parser = parse_status)]
    pub(crate) status: StatusFilter,
    /// Case-insensitive search over applicant name and email
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Sort column (applicantName, amount, riskScore); unknown keys are ignored
    #[arg(long)]
    pub(crate) sort_key: Option<String>,
    /// Sort descending instead of ascending
    #[arg(long)]
    pub(crate) desc: bool,
    /// Number of rows to show
    #[arg(long, default_value_t = 10)]
    pub(crate) page_size: usize,
    /// Reporting date for the summary cards (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn parse_status(raw: &str) -> Result<StatusFilter, String> {
    raw.parse()
}

/// Maps the CLI flags onto query params through the same header-selection
/// state the table UI drives. Selecting the active key again flips the
/// direction to descending; an unknown key leaves the order untouched.
fn demo_params(args: &DemoArgs) -> QueryParams {
    let mut sort = SortState::default();
    if let Some(key) = args.sort_key.as_deref().and_then(SortKey::parse) {
        sort.select(key);
        if args.desc {
            sort.select(key);
        }
    }

    let mut params = QueryParams {
        status: args.status,
        search_term: args.search.clone(),
        page_size: args.page_size,
        ..QueryParams::default()
    };
    sort.apply(&mut params);
    params
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryApplicationRepository::seeded());
    let service = DashboardService::new(repository);

    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());
    let summary = service.summary(today).map_err(AppError::from)?;
    println!("== Summary ({today}) ==");
    println!("total applications : {}", summary.total_applications);
    println!("pending review     : {}", summary.pending_count);
    println!("approved today     : {}", summary.approved_today);
    println!("total value        : £{:.2}", summary.total_value);

    let params = demo_params(&args);
    let table = service.table(&params).map_err(AppError::from)?;
    println!();
    println!(
        "== Applications ({} shown of {} matched) ==",
        table.rows.len(),
        table.total_matched
    );
    for row in &table.rows {
        println!(
            "{}  {:<20} £{:>12.2}  risk {:>4.1}  {}",
            row.id.0,
            row.applicant_name,
            row.amount,
            row.risk_score,
            row.status.label()
        );
    }

    if let Some(first) = table.rows.first() {
        for role in [UserRole::LoanOfficer, UserRole::SeniorOfficer] {
            let detail = service.detail(&first.id, role).map_err(AppError::from)?;
            println!();
            println!("== Detail for {} as {} ==", detail.id.0, role.label());
            println!("applicant          : {}", detail.applicant_name);
            println!("purpose            : {}", detail.purpose);
            match detail.monthly_payment {
                Some(payment) => println!("monthly payment    : £{payment:.2}"),
                None => println!("monthly payment    : -"),
            }
            println!("national insurance : {}", detail.national_insurance);
            println!("date of birth      : {}", detail.date_of_birth);
            println!("bank details       : {}", detail.bank_details);
            println!(
                "risk               : {:.1} ({})",
                detail.risk.score,
                detail.risk.category.label()
            );
            for factor in &detail.risk.breakdown.factors {
                println!("  {:<22} impact {:>5.2}  {}", factor.name, factor.impact, factor.description);
            }
        }
    }

    Ok(())
}
