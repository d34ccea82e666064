//! Employee operations of the [`DirectoryStore`].

use chrono::NaiveDate;
use sea_orm::{EntityTrait, JoinType, NotSet, QueryOrder, QuerySelect, RelationTrait, Set};
use serde::Deserialize;

use super::{DirectoryStore, StoreResult};
use crate::models::employee::{self, Entity as Employee};
use crate::models::{EmployeeRecord, EmployeeSummary, department, job};

/// Input for [`DirectoryStore::add_employee`].
///
/// Foreign keys are passed through as given; the database rejects ids that
/// do not exist.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub hire_date: NaiveDate,
    pub salary: Option<f64>,
    pub job_id: Option<i32>,
    pub department_id: Option<i32>,
    pub manager_id: Option<i32>,
}

impl From<NewEmployee> for employee::ActiveModel {
    fn from(input: NewEmployee) -> Self {
        Self {
            employee_id: NotSet,
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email),
            phone_number: Set(input.phone_number),
            hire_date: Set(input.hire_date),
            salary: Set(input.salary),
            job_id: Set(input.job_id),
            department_id: Set(input.department_id),
            manager_id: Set(input.manager_id),
        }
    }
}

impl DirectoryStore {
    /// Inserts an employee and returns the id assigned by the database
    pub async fn add_employee(&self, input: NewEmployee) -> StoreResult<i32> {
        let model = employee::ActiveModel::from(input);
        self.scoped("add_employee", move |txn| {
            Box::pin(async move {
                let inserted = Employee::insert(model).exec(txn).await?;
                Ok(inserted.last_insert_id)
            })
        })
        .await
    }

    /// Lists every employee by ascending id, with the job title and
    /// department name resolved through outer joins
    pub async fn list_employees(&self) -> StoreResult<Vec<EmployeeRecord>> {
        self.scoped("list_employees", |txn| {
            Box::pin(async move {
                Employee::find()
                    .select_only()
                    .columns([
                        employee::Column::EmployeeId,
                        employee::Column::FirstName,
                        employee::Column::LastName,
                        employee::Column::Email,
                        employee::Column::PhoneNumber,
                        employee::Column::HireDate,
                        employee::Column::Salary,
                    ])
                    .column(job::Column::JobTitle)
                    .column(department::Column::DepartmentName)
                    .column(employee::Column::ManagerId)
                    .join(JoinType::LeftJoin, employee::Relation::Job.def())
                    .join(JoinType::LeftJoin, employee::Relation::Department.def())
                    .order_by_asc(employee::Column::EmployeeId)
                    .into_model::<EmployeeRecord>()
                    .all(txn)
                    .await
            })
        })
        .await
    }

    /// Lists `(id, first name, last name)` ordered by first then last name
    pub async fn list_employees_min(&self) -> StoreResult<Vec<EmployeeSummary>> {
        self.scoped("list_employees_min", |txn| {
            Box::pin(async move {
                Employee::find()
                    .select_only()
                    .columns([
                        employee::Column::EmployeeId,
                        employee::Column::FirstName,
                        employee::Column::LastName,
                    ])
                    .order_by_asc(employee::Column::FirstName)
                    .order_by_asc(employee::Column::LastName)
                    .into_model::<EmployeeSummary>()
                    .all(txn)
                    .await
            })
        })
        .await
    }
}
