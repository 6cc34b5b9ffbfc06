use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::domain::LoanApplication;

/// Annual interest rate used for the indicative monthly payment when no
/// product-specific rate is configured.
pub const DEFAULT_ANNUAL_RATE: f64 = 0.06;

const CREDIT_SCORE_FLOOR: f64 = 300.0;
const CREDIT_SCORE_CEILING: f64 = 850.0;
const CREDIT_SCORE_RANGE: f64 = CREDIT_SCORE_CEILING - CREDIT_SCORE_FLOOR;
const CREDIT_SCORE_WEIGHT: f64 = 3.5;
const DTI_CAP: f64 = 3.5;
const AMOUNT_REFERENCE: f64 = 500_000.0;
const AMOUNT_CAP: f64 = 3.0;
const SCORE_CEILING: f64 = 10.0;

/// Synthetic [0, 10] default-risk band.
///
/// Boundaries are fixed: LOW covers scores up to 3, MEDIUM up to 7, HIGH
/// everything above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    pub fn for_score(score: f64) -> Self {
        if score <= 3.0 {
            RiskCategory::Low
        } else if score <= 7.0 {
            RiskCategory::Medium
        } else {
            RiskCategory::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskCategory::Low => "LOW",
            RiskCategory::Medium => "MEDIUM",
            RiskCategory::High => "HIGH",
        }
    }
}

/// Discrete contribution to a risk score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub name: String,
    pub value: f64,
    pub impact: f64,
    pub description: String,
}

/// Per-factor impacts plus the ordered factor listing shown in the detail
/// view. Factor order is fixed: credit score, debt-to-income, loan amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdown {
    pub credit_score_impact: f64,
    pub debt_to_income_impact: f64,
    pub loan_amount_impact: f64,
    pub factors: Vec<RiskFactor>,
}

/// Risk assessment output for a single application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCalculation {
    pub score: f64,
    pub category: RiskCategory,
    pub breakdown: RiskBreakdown,
    pub calculated_at: chrono::DateTime<Utc>,
}

/// Computes the risk assessment for an application.
///
/// Pure and total: out-of-range credit scores are clamped to [300, 850] and
/// negative ratios or amounts contribute zero, so degenerate records never
/// panic. The score is clamped to [0, 10] and rounded half away from zero
/// to one decimal place; factor impacts are rounded to two.
pub fn calculate_risk_score(application: &LoanApplication) -> RiskCalculation {
    let credit_score = f64::from(application.credit_score).clamp(CREDIT_SCORE_FLOOR, CREDIT_SCORE_CEILING);
    let dti = application.debt_to_income_ratio.max(0.0);
    let amount = application.amount.max(0.0);

    let credit_score_impact = ((CREDIT_SCORE_CEILING - credit_score) / CREDIT_SCORE_RANGE) * CREDIT_SCORE_WEIGHT;
    let debt_to_income_impact = (dti * 10.0 * 0.35).min(DTI_CAP);
    let loan_amount_impact = ((amount / AMOUNT_REFERENCE) * 3.0).min(AMOUNT_CAP);

    let score = (credit_score_impact + debt_to_income_impact + loan_amount_impact)
        .min(SCORE_CEILING)
        .max(0.0);
    let score = round_to(score, 1);

    let factors = vec![
        RiskFactor {
            name: "Credit Score".to_string(),
            value: f64::from(application.credit_score),
            impact: round_to(credit_score_impact, 2),
            description: format!("Credit score of {}", application.credit_score),
        },
        RiskFactor {
            name: "Debt-to-Income Ratio".to_string(),
            value: application.debt_to_income_ratio,
            impact: round_to(debt_to_income_impact, 2),
            description: format!(
                "DTI ratio of {:.1}%",
                application.debt_to_income_ratio * 100.0
            ),
        },
        RiskFactor {
            name: "Loan Amount".to_string(),
            value: application.amount,
            impact: round_to(loan_amount_impact, 2),
            description: format!("Loan amount of £{}", group_thousands(application.amount)),
        },
    ];

    RiskCalculation {
        score,
        category: RiskCategory::for_score(score),
        breakdown: RiskBreakdown {
            credit_score_impact: round_to(credit_score_impact, 2),
            debt_to_income_impact: round_to(debt_to_income_impact, 2),
            loan_amount_impact: round_to(loan_amount_impact, 2),
            factors,
        },
        calculated_at: Utc::now(),
    }
}

/// Returns a replacement record with the cached `risk_score` recomputed
/// from the current source attributes. The input is never mutated in place.
pub fn with_refreshed_risk(application: &LoanApplication) -> LoanApplication {
    let mut refreshed = application.clone();
    refreshed.risk_score = calculate_risk_score(application).score;
    refreshed
}

/// Indicative monthly repayment under a standard amortizing annuity.
///
/// Returns `None` when the amount or term is zero, so callers can render a
/// "not applicable" placeholder instead of dividing by zero. A zero rate
/// degenerates to straight-line repayment.
pub fn monthly_payment(amount: f64, term_months: u32, annual_rate: f64) -> Option<f64> {
    if amount <= 0.0 || term_months == 0 {
        return None;
    }

    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return Some(amount / f64::from(term_months));
    }

    let discount = 1.0 - (1.0 + monthly_rate).powi(-(term_months as i32));
    Some(amount * monthly_rate / discount)
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

fn group_thousands(value: f64) -> String {
    let whole = value.trunc().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
