//! # Analytics API Handlers
//!
//! Read-only reports: salary statistics, headcount per department and
//! average salary per job.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::handlers::types::ListResponse;
use crate::models::{DepartmentHeadcount, JobSalaryAverage, SalarySummary};
use crate::server::AppState;

/// Everything shown on the analytics page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsOverview {
    pub summary: SalarySummary,
    pub headcount: Vec<DepartmentHeadcount>,
    pub job_salaries: Vec<JobSalaryAverage>,
}

/// Salary summary, headcount per department and average salary per job
#[utoipa::path(
    get,
    path = "/api/v1/analytics",
    responses(
        (status = 200, description = "All reports", body = AnalyticsOverview),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "analytics"
)]
pub async fn overview(State(state): State<AppState>) -> Result<Json<AnalyticsOverview>, ApiError> {
    let summary = state.store.salary_summary().await?;
    let headcount = state.store.employees_per_department().await?;
    let job_salaries = state.store.avg_salary_per_job().await?;

    Ok(Json(AnalyticsOverview {
        summary,
        headcount,
        job_salaries,
    }))
}

/// Headcount per department, including empty departments
#[utoipa::path(
    get,
    path = "/api/v1/analytics/headcount",
    responses(
        (status = 200, description = "Headcount descending, then name", body = ListResponse<DepartmentHeadcount>),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "analytics"
)]
pub async fn headcount(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<DepartmentHeadcount>>, ApiError> {
    let rows = state.store.employees_per_department().await?;
    Ok(Json(ListResponse::new(rows)))
}

/// Average salary per job; jobs without salaried employees come last
#[utoipa::path(
    get,
    path = "/api/v1/analytics/job-salaries",
    responses(
        (status = 200, description = "Average descending, nulls last, then title", body = ListResponse<JobSalaryAverage>),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "analytics"
)]
pub async fn job_salaries(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<JobSalaryAverage>>, ApiError> {
    let rows = state.store.avg_salary_per_job().await?;
    Ok(Json(ListResponse::new(rows)))
}

/// Organization-wide salary statistics
#[utoipa::path(
    get,
    path = "/api/v1/analytics/salary-summary",
    responses(
        (status = 200, description = "Salary statistics", body = SalarySummary),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "analytics"
)]
pub async fn salary_summary(
    State(state): State<AppState>,
) -> Result<Json<SalarySummary>, ApiError> {
    Ok(Json(state.store.salary_summary().await?))
}
