use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

use super::access::UserRole;
use super::domain::ApplicationId;
use super::query::QueryParams;
use super::repository::RepositoryError;
use super::service::{DashboardService, DashboardServiceError};
use super::ApplicationRepository;

/// Router builder exposing the read-only dashboard endpoints.
pub fn dashboard_router<R>(service: Arc<DashboardService<R>>) -> Router
where
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route("/api/v1/applications", get(table_handler::<R>))
        .route("/api/v1/applications/summary", get(summary_handler::<R>))
        .route("/api/v1/applications/:application_id", get(detail_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DetailQuery {
    /// Requesting role; absent means least privilege.
    #[serde(default)]
    pub(crate) role: UserRole,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SummaryQuery {
    /// Reporting date override (YYYY-MM-DD); defaults to the current day.
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) async fn table_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Query(params): Query<QueryParams>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.table(&params) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn summary_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Query(params): Query<SummaryQuery>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let today = params.today.unwrap_or_else(|| Utc::now().date_naive());
    match service.summary(today) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Path(application_id): Path<String>,
    Query(params): Query<DetailQuery>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.detail(&id, params.role) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: DashboardServiceError) -> Response {
    match error {
        DashboardServiceError::NotFound(id) => {
            let payload = json!({
                "error": "application not found",
                "applicationId": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        DashboardServiceError::Repository(RepositoryError::Unavailable(reason)) => {
            let payload = json!({
                "error": format!("repository unavailable: {reason}"),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
