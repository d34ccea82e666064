//! # Job API Handlers

use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::handlers::types::{CreatedResponse, ListResponse};
use crate::handlers::validation::FieldErrors;
use crate::models::job;
use crate::server::AppState;
use crate::store::NewJob;

/// Add-job form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddJobRequest {
    #[serde(default)]
    #[schema(example = "Engineer")]
    pub job_title: String,
    #[serde(default)]
    #[schema(example = 50000.0)]
    pub min_salary: Option<f64>,
    #[serde(default)]
    #[schema(example = 90000.0)]
    pub max_salary: Option<f64>,
}

impl AddJobRequest {
    pub fn validate(self) -> Result<NewJob, ApiError> {
        let mut errors = FieldErrors::new();
        errors.require_text("job_title", &self.job_title);
        let message = if errors.is_empty() {
            "Salary bounds must be zero or more."
        } else {
            "Job title is required."
        };
        errors
            .non_negative("min_salary", self.min_salary)
            .non_negative("max_salary", self.max_salary)
            .finish(message)?;

        Ok(NewJob {
            job_title: self.job_title.trim().to_string(),
            min_salary: self.min_salary,
            max_salary: self.max_salary,
        })
    }
}

/// List jobs ordered by title
#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    responses(
        (status = 200, description = "Jobs ordered by title", body = ListResponse<job::Model>),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "jobs"
)]
pub async fn list_jobs(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<job::Model>>, ApiError> {
    let jobs = state.store.list_jobs().await?;
    Ok(Json(ListResponse::new(jobs)))
}

/// Add a job. A minimum above the maximum is accepted as entered.
#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    request_body = AddJobRequest,
    responses(
        (status = 201, description = "Job added", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "jobs"
)]
pub async fn add_job(
    State(state): State<AppState>,
    payload: Result<Json<AddJobRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(request) = payload?;
    let input = request.validate()?;

    let id = state.store.add_job(input).await?;
    info!(job_id = id, "Job added");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_rejected() {
        let err = AddJobRequest {
            job_title: "   ".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        assert_eq!(err.message, Box::from("Job title is required."));
    }

    #[test]
    fn test_negative_bounds_rejected_but_inverted_bounds_pass() {
        let negative = AddJobRequest {
            job_title: "Engineer".to_string(),
            min_salary: Some(-5.0),
            max_salary: None,
        };
        let err = negative.validate().unwrap_err();
        assert_eq!(err.message, Box::from("Salary bounds must be zero or more."));

        let inverted = AddJobRequest {
            job_title: " Engineer ".to_string(),
            min_salary: Some(90000.0),
            max_salary: Some(50000.0),
        };
        let input = inverted.validate().expect("inverted bounds are accepted");
        assert_eq!(input.job_title, "Engineer");
        assert!(input.has_inverted_bounds());
    }
}
