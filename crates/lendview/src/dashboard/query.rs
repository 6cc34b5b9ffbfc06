use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::domain::{ApplicationStatus, LoanApplication};

/// Status stage of the pipeline: either a single exact status or the `ALL`
/// sentinel which disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApplicationStatus),
}

impl StatusFilter {
    pub fn matches(self, status: ApplicationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "ALL" {
            return Ok(StatusFilter::All);
        }
        ApplicationStatus::parse(value)
            .map(StatusFilter::Only)
            .ok_or_else(|| format!("unknown status filter '{value}'"))
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Table ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Allow-listed sortable columns. Anything else requested over the wire is
/// ignored rather than rejected, so the table stays usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ApplicantName,
    Amount,
    RiskScore,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "applicantName" => Some(SortKey::ApplicantName),
            "amount" => Some(SortKey::Amount),
            "riskScore" => Some(SortKey::RiskScore),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::ApplicantName => "applicantName",
            SortKey::Amount => "amount",
            SortKey::RiskScore => "riskScore",
        }
    }

    fn compare(self, a: &LoanApplication, b: &LoanApplication) -> Ordering {
        match self {
            SortKey::ApplicantName => a.applicant_name.cmp(&b.applicant_name),
            SortKey::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
            SortKey::RiskScore => a
                .risk_score
                .partial_cmp(&b.risk_score)
                .unwrap_or(Ordering::Equal),
        }
    }
}

/// Column-header selection state: picking the active key flips direction,
/// picking a new key starts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn select(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Asc;
        }
    }

    pub fn apply(self, params: &mut QueryParams) {
        params.sort_key = self.key.map(|key| key.as_str().to_string());
        params.sort_direction = self.direction;
    }
}

const DEFAULT_PAGE_SIZE: usize = 10;

/// Wire-shaped table query parameters. All fields are optional on the wire
/// and default to {ALL, "", no sort, asc, 10}; the shape round-trips
/// losslessly through URL encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    pub status: StatusFilter,
    pub search_term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,
    pub sort_direction: SortDirection,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            search_term: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Asc,
            page_size: DEFAULT_PAGE_SIZE,
            min_amount: None,
            max_amount: None,
        }
    }
}

/// Filtered, sorted, paginated view over one application snapshot.
///
/// `total_matched` counts the filtered set before pagination so callers can
/// distinguish "zero matches" from "results beyond the page".
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub page: Vec<LoanApplication>,
    pub total_matched: usize,
}

/// Runs the table pipeline over an immutable snapshot.
///
/// Stage order is fixed (filter, then sort, then paginate); the sort is
/// stable so ties preserve snapshot order, and an unknown sort key leaves
/// the filtered order untouched. An empty result is a valid outcome, not
/// an error. A `page_size` of zero is honored as an empty prefix rather
/// than rejected; `total_matched` still counts every match.
pub fn query(applications: &[LoanApplication], params: &QueryParams) -> QueryResult {
    let needle = params.search_term.trim().to_lowercase();

    let mut matched: Vec<&LoanApplication> = applications
        .iter()
        .filter(|application| params.status.matches(application.status))
        .filter(|application| {
            params
                .min_amount
                .map_or(true, |floor| application.amount >= floor)
        })
        .filter(|application| {
            params
                .max_amount
                .map_or(true, |ceiling| application.amount <= ceiling)
        })
        .filter(|application| {
            if needle.is_empty() {
                return true;
            }
            application.applicant_name.to_lowercase().contains(&needle)
                || application.email.to_lowercase().contains(&needle)
        })
        .collect();

    let total_matched = matched.len();

    if let Some(key) = params.sort_key.as_deref().and_then(SortKey::parse) {
        matched.sort_by(|a, b| {
            let ordering = key.compare(a, b);
            match params.sort_direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    QueryResult {
        page: matched
            .into_iter()
            .take(params.page_size)
            .cloned()
            .collect(),
        total_matched,
    }
}
