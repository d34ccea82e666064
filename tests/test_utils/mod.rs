//! Test utilities for database testing.
//!
//! Every helper hands out a fresh in-memory SQLite database with the
//! directory schema created, so tests never share rows.

use anyhow::Result;
use chrono::NaiveDate;
use directory::schema::ensure_schema;
use directory::store::{DirectoryStore, NewDepartment, NewEmployee, NewJob};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Sets up an in-memory SQLite database with the directory schema.
///
/// The pool is pinned to a single connection; every new SQLite connection
/// would otherwise open its own empty in-memory database.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await?;
    ensure_schema(&db).await?;

    Ok(db)
}

/// Sets up a store over a fresh test database.
pub async fn setup_test_store() -> Result<DirectoryStore> {
    Ok(DirectoryStore::new(setup_test_db().await?))
}

/// Inserts a job with no salary band.
#[allow(dead_code)]
pub async fn create_test_job(store: &DirectoryStore, title: &str) -> Result<i32> {
    let id = store
        .add_job(NewJob {
            job_title: title.to_string(),
            min_salary: None,
            max_salary: None,
        })
        .await?;
    Ok(id)
}

/// Inserts a department with no location.
#[allow(dead_code)]
pub async fn create_test_department(store: &DirectoryStore, name: &str) -> Result<i32> {
    let id = store
        .add_department(NewDepartment {
            department_name: name.to_string(),
            location: None,
        })
        .await?;
    Ok(id)
}

/// Builds an employee hired on 2020-01-01 with the given placement.
#[allow(dead_code)]
pub fn new_employee(
    first_name: &str,
    last_name: &str,
    salary: Option<f64>,
    job_id: i32,
    department_id: i32,
) -> NewEmployee {
    NewEmployee {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone_number: None,
        hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        salary,
        job_id: Some(job_id),
        department_id: Some(department_id),
        manager_id: None,
    }
}
