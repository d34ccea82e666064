//! Employee entity model
//!
//! This module contains the SeaORM entity model for the employees table.
//! Employees optionally reference a job, a department and another employee
//! acting as their manager.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// Employee entity as stored in the `employees` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Store-assigned identifier (primary key)
    #[sea_orm(primary_key)]
    pub employee_id: i32,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    pub phone_number: Option<String>,

    pub hire_date: Date,

    /// Annual salary, non-negative when present
    pub salary: Option<f64>,

    pub job_id: Option<i32>,

    pub department_id: Option<i32>,

    /// Another employee acting as this employee's manager
    pub manager_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job::Entity",
        from = "Column::JobId",
        to = "super::job::Column::JobId"
    )]
    Job,
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::DepartmentId"
    )]
    Department,
    #[sea_orm(belongs_to = "Entity", from = "Column::ManagerId", to = "Column::EmployeeId")]
    Manager,
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
