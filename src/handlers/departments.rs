//! # Department API Handlers

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
use crate::handlers::validation::{FieldErrors, optional_text};
use crate::models::department;
use crate::server::AppState;
use crate::store::NewDepartment;

/// Add-department form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddDepartmentRequest {
    #[serde(default)]
    #[schema(example = "Engineering")]
    pub department_name: String,
    #[serde(default)]
    #[schema(example = "Building A")]
    pub location: Option<String>,
}

impl AddDepartmentRequest {
    pub fn validate(self) -> Result<NewDepartment, ApiError> {
        FieldErrors::new()
            .require_text("department_name", &self.department_name)
            .finish("Department name is required.")?;

        Ok(NewDepartment {
            department_name: self.department_name.trim().to_string(),
            location: optional_text(self.location),
        })
    }
}

/// List departments ordered by name
#[utoipa::path(
    get,
    path = "/api/v1/departments",
    responses(
        (status = 200, description = "Departments ordered by name", body = ListResponse<department::Model>),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "departments"
)]
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<department::Model>>, ApiError> {
    let departments = state.store.list_departments().await?;
    Ok(Json(ListResponse::new(departments)))
}

/// Add a department
#[utoipa::path(
    post,
    path = "/api/v1/departments",
    request_body = AddDepartmentRequest,
    responses(
        (status = 201, description = "Department added", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "departments"
)]
pub async fn add_department(
    State(state): State<AppState>,
    payload: Result<Json<AddDepartmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(request) = payload?;
    let input = request.validate()?;

    let id = state.store.add_department(input).await?;
    info!(department_id = id, "Department added");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
