//! Schema definition for the directory tables.
//!
//! The application relies on the database for every integrity rule, so the
//! rules are spelled out here: foreign keys from employees to jobs,
//! departments and other employees, non-null names, non-empty titles and
//! names, and non-negative salaries. Creation is idempotent; there is no
//! versioned migration history.

use sea_orm::sea_query::{
    ColumnDef, Expr, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, Table,
    TableCreateStatement,
};
use sea_orm::{ConnectionTrait, DbErr, DeriveIden};
use tracing::info;

#[derive(DeriveIden)]
enum Departments {
    Table,
    DepartmentId,
    DepartmentName,
    Location,
}

#[derive(DeriveIden)]
enum Jobs {
    Table,
    JobId,
    JobTitle,
    MinSalary,
    MaxSalary,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    EmployeeId,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    HireDate,
    Salary,
    JobId,
    DepartmentId,
    ManagerId,
}

/// Creates the `departments`, `jobs` and `employees` tables and their
/// indexes when they do not exist yet
pub async fn ensure_schema<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();

    info!("Ensuring directory schema exists");

    // Referenced tables first
    for stmt in [departments_table(), jobs_table(), employees_table()] {
        db.execute(backend.build(&stmt)).await?;
    }

    for stmt in employee_indexes() {
        db.execute(backend.build(&stmt)).await?;
    }

    info!("Directory schema ready");
    Ok(())
}

fn departments_table() -> TableCreateStatement {
    Table::create()
        .table(Departments::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Departments::DepartmentId)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Departments::DepartmentName)
                .text()
                .not_null()
                .check(Expr::cust("length(department_name) > 0")),
        )
        .col(ColumnDef::new(Departments::Location).text().null())
        .to_owned()
}

fn jobs_table() -> TableCreateStatement {
    Table::create()
        .table(Jobs::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Jobs::JobId)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Jobs::JobTitle)
                .text()
                .not_null()
                .check(Expr::cust("length(job_title) > 0")),
        )
        // min <= max is intentionally not constrained
        .col(
            ColumnDef::new(Jobs::MinSalary)
                .double()
                .null()
                .check(Expr::col(Jobs::MinSalary).gte(0)),
        )
        .col(
            ColumnDef::new(Jobs::MaxSalary)
                .double()
                .null()
                .check(Expr::col(Jobs::MaxSalary).gte(0)),
        )
        .to_owned()
}

fn employees_table() -> TableCreateStatement {
    Table::create()
        .table(Employees::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Employees::EmployeeId)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Employees::FirstName).text().not_null())
        .col(ColumnDef::new(Employees::LastName).text().not_null())
        .col(ColumnDef::new(Employees::Email).text().not_null())
        .col(ColumnDef::new(Employees::PhoneNumber).text().null())
        .col(ColumnDef::new(Employees::HireDate).date().not_null())
        .col(
            ColumnDef::new(Employees::Salary)
                .double()
                .null()
                .check(Expr::col(Employees::Salary).gte(0)),
        )
        .col(ColumnDef::new(Employees::JobId).integer().null())
        .col(ColumnDef::new(Employees::DepartmentId).integer().null())
        .col(ColumnDef::new(Employees::ManagerId).integer().null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_employees_job_id")
                .from(Employees::Table, Employees::JobId)
                .to(Jobs::Table, Jobs::JobId)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_employees_department_id")
                .from(Employees::Table, Employees::DepartmentId)
                .to(Departments::Table, Departments::DepartmentId)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_employees_manager_id")
                .from(Employees::Table, Employees::ManagerId)
                .to(Employees::Table, Employees::EmployeeId)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

fn employee_indexes() -> [IndexCreateStatement; 4] {
    [
        Index::create()
            .name("idx_employees_job_id")
            .table(Employees::Table)
            .col(Employees::JobId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_employees_department_id")
            .table(Employees::Table)
            .col(Employees::DepartmentId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_employees_manager_id")
            .table(Employees::Table)
            .col(Employees::ManagerId)
            .if_not_exists()
            .to_owned(),
        // Backs the manager picker ordering
        Index::create()
            .name("idx_employees_name")
            .table(Employees::Table)
            .col(Employees::FirstName)
            .col(Employees::LastName)
            .if_not_exists()
            .to_owned(),
    ]
}
