//! # Data Models
//!
//! SeaORM entities for the directory tables plus the read-side row shapes
//! returned by listing and reporting queries.

use chrono::NaiveDate;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod department;
pub mod employee;
pub mod job;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "hr-directory".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Employee row joined with its job title and department name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct EmployeeRecord {
    #[schema(example = 1)]
    pub employee_id: i32,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub phone_number: Option<String>,
    #[schema(value_type = String, format = Date, example = "2020-01-01")]
    pub hire_date: NaiveDate,
    #[schema(example = 70000.0)]
    pub salary: Option<f64>,
    /// Title of the referenced job, null when the employee has none
    #[schema(example = "Engineer")]
    pub job_title: Option<String>,
    /// Name of the referenced department, null when the employee has none
    #[schema(example = "Engineering")]
    pub department_name: Option<String>,
    pub manager_id: Option<i32>,
}

/// Minimal employee projection used to offer manager choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct EmployeeSummary {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl EmployeeSummary {
    /// Label shown next to a manager choice, e.g. `Ada Lovelace (ID 1)`
    pub fn label(&self) -> String {
        format!("{} {} (ID {})", self.first_name, self.last_name, self.employee_id)
    }
}

/// Headcount of a single department; zero for departments without employees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct DepartmentHeadcount {
    #[schema(example = "Engineering")]
    pub department_name: String,
    #[schema(example = 2)]
    pub headcount: i64,
}

/// Average salary of the employees holding a job.
///
/// `avg_salary` is rounded to two decimals by the database and is null when
/// no employee (or no salaried employee) holds the job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct JobSalaryAverage {
    #[schema(example = "Engineer")]
    pub job_title: String,
    #[schema(example = 70000.0)]
    pub avg_salary: Option<f64>,
}

/// Organization-wide salary statistics. Every figure is zero when there are
/// no employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct SalarySummary {
    pub total_employees: i64,
    pub total_salary: f64,
    pub avg_salary: f64,
    pub min_salary: f64,
    pub max_salary: f64,
}
