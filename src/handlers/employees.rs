//! # Employee API Handlers
//!
//! The employee directory listing, the add-employee form submission and the
//! choices that populate that form.

use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::handlers::types::{Choice, CreatedResponse, ListResponse};
use crate::handlers::validation::{FieldErrors, optional_text};
use crate::models::{EmployeeRecord, EmployeeSummary};
use crate::server::AppState;
use crate::store::NewEmployee;

/// Add-employee form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddEmployeeRequest {
    #[serde(default)]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Defaults to today when omitted
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "2020-01-01")]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    #[schema(example = 70000.0)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub job_id: Option<i32>,
    #[serde(default)]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub manager_id: Option<i32>,
}

impl AddEmployeeRequest {
    /// Checks the required fields and turns the submission into store input
    pub fn validate(self) -> Result<NewEmployee, ApiError> {
        FieldErrors::new()
            .require_text("first_name", &self.first_name)
            .require_text("last_name", &self.last_name)
            .require_text("email", &self.email)
            .require_selection("job_id", &self.job_id)
            .require_selection("department_id", &self.department_id)
            .non_negative("salary", self.salary)
            .finish("Please fill all required fields (First/Last/Email/Job/Department)")?;

        Ok(NewEmployee {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: optional_text(self.phone_number),
            hire_date: self.hire_date.unwrap_or_else(|| Utc::now().date_naive()),
            salary: self.salary,
            job_id: self.job_id,
            department_id: self.department_id,
            manager_id: self.manager_id,
        })
    }
}

/// Choices offered by the add-employee form
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeFormOptions {
    pub jobs: Vec<Choice>,
    pub departments: Vec<Choice>,
    /// Existing employees that can be picked as manager
    pub managers: Vec<Choice>,
}

/// List every employee with job title and department name
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "Employees ordered by id", body = ListResponse<EmployeeRecord>),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<EmployeeRecord>>, ApiError> {
    let employees = state.store.list_employees().await?;
    Ok(Json(ListResponse::new(employees)))
}

/// Add a new employee
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = AddEmployeeRequest,
    responses(
        (status = 201, description = "Employee added", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 500, description = "Store error, e.g. unknown job, department or manager", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn add_employee(
    State(state): State<AppState>,
    payload: Result<Json<AddEmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(request) = payload?;
    let input = request.validate()?;

    let id = state.store.add_employee(input).await?;
    info!(employee_id = id, "Employee added");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// List employees as manager candidates, ordered by first then last name
#[utoipa::path(
    get,
    path = "/api/v1/employees/managers",
    responses(
        (status = 200, description = "Manager candidates", body = ListResponse<EmployeeSummary>),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn list_managers(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<EmployeeSummary>>, ApiError> {
    let managers = state.store.list_employees_min().await?;
    Ok(Json(ListResponse::new(managers)))
}

/// Jobs, departments and manager candidates for the add-employee form
#[utoipa::path(
    get,
    path = "/api/v1/employees/form-options",
    responses(
        (status = 200, description = "Form choices", body = EmployeeFormOptions),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn employee_form_options(
    State(state): State<AppState>,
) -> Result<Json<EmployeeFormOptions>, ApiError> {
    let jobs = state.store.list_jobs().await?;
    let departments = state.store.list_departments().await?;
    let managers = state.store.list_employees_min().await?;

    Ok(Json(EmployeeFormOptions {
        jobs: jobs
            .into_iter()
            .map(|job| Choice {
                id: job.job_id,
                label: format!("{} (ID {})", job.job_title, job.job_id),
            })
            .collect(),
        departments: departments
            .into_iter()
            .map(|dept| Choice {
                id: dept.department_id,
                label: format!("{} (ID {})", dept.department_name, dept.department_id),
            })
            .collect(),
        managers: managers
            .into_iter()
            .map(|manager| Choice {
                id: manager.employee_id,
                label: manager.label(),
            })
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> AddEmployeeRequest {
        AddEmployeeRequest {
            first_name: " Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: Some("".to_string()),
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            salary: Some(70000.0),
            job_id: Some(1),
            department_id: Some(1),
            manager_id: None,
        }
    }

    #[test]
    fn test_validate_trims_and_normalizes() {
        let input = complete_request().validate().expect("valid request");

        assert_eq!(input.first_name, "Ada");
        assert_eq!(input.phone_number, None);
        assert_eq!(input.hire_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn test_validate_requires_job_and_department() {
        let request = AddEmployeeRequest {
            job_id: None,
            department_id: None,
            ..complete_request()
        };

        let err = request.validate().unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        let details = err.details.unwrap();
        let fields: Vec<_> = details["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(fields, vec!["job_id", "department_id"]);
    }

    #[test]
    fn test_validate_defaults_hire_date_to_today() {
        let request = AddEmployeeRequest {
            hire_date: None,
            ..complete_request()
        };
        let input = request.validate().unwrap();
        assert_eq!(input.hire_date, Utc::now().date_naive());
    }
}
