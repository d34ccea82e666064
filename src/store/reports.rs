//! Aggregate reports of the [`DirectoryStore`].
//!
//! The SQL here is shared by PostgreSQL and SQLite: outer joins keep
//! departments and jobs without employees, rounding happens in the database,
//! and the nested `CAST`s bring the rounded value back to a double on both
//! backends.

use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, Statement};

use super::{DirectoryStore, StoreResult};
use crate::models::{DepartmentHeadcount, JobSalaryAverage, SalarySummary};

const EMPLOYEES_PER_DEPARTMENT_SQL: &str = "\
SELECT d.department_name AS department_name, COUNT(e.employee_id) AS headcount
FROM departments d
LEFT JOIN employees e ON e.department_id = d.department_id
GROUP BY d.department_id, d.department_name
ORDER BY headcount DESC, d.department_name";

const AVG_SALARY_PER_JOB_SQL: &str = "\
SELECT j.job_title AS job_title,
       CAST(ROUND(CAST(AVG(e.salary) AS NUMERIC), 2) AS DOUBLE PRECISION) AS avg_salary
FROM jobs j
LEFT JOIN employees e ON e.job_id = j.job_id
GROUP BY j.job_id, j.job_title
ORDER BY avg_salary DESC NULLS LAST, j.job_title";

const SALARY_SUMMARY_SQL: &str = "\
SELECT COUNT(*) AS total_employees,
       CAST(COALESCE(SUM(salary), 0) AS DOUBLE PRECISION) AS total_salary,
       CAST(COALESCE(ROUND(CAST(AVG(salary) AS NUMERIC), 2), 0) AS DOUBLE PRECISION) AS avg_salary,
       CAST(COALESCE(MIN(salary), 0) AS DOUBLE PRECISION) AS min_salary,
       CAST(COALESCE(MAX(salary), 0) AS DOUBLE PRECISION) AS max_salary
FROM employees";

impl DirectoryStore {
    /// Headcount of every department, including those with no employees,
    /// ordered by headcount descending then name
    pub async fn employees_per_department(&self) -> StoreResult<Vec<DepartmentHeadcount>> {
        self.scoped("employees_per_department", |txn| {
            Box::pin(async move {
                let stmt = Statement::from_string(
                    txn.get_database_backend(),
                    EMPLOYEES_PER_DEPARTMENT_SQL,
                );
                DepartmentHeadcount::find_by_statement(stmt).all(txn).await
            })
        })
        .await
    }

    /// Average salary of every job, rounded to two decimals. Jobs without
    /// salaried employees report a null average and sort last.
    pub async fn avg_salary_per_job(&self) -> StoreResult<Vec<JobSalaryAverage>> {
        self.scoped("avg_salary_per_job", |txn| {
            Box::pin(async move {
                let stmt =
                    Statement::from_string(txn.get_database_backend(), AVG_SALARY_PER_JOB_SQL);
                JobSalaryAverage::find_by_statement(stmt).all(txn).await
            })
        })
        .await
    }

    /// Count, sum, rounded average, minimum and maximum of all salaries.
    /// Every figure defaults to zero on an empty table.
    pub async fn salary_summary(&self) -> StoreResult<SalarySummary> {
        self.scoped("salary_summary", |txn| {
            Box::pin(async move {
                let stmt = Statement::from_string(txn.get_database_backend(), SALARY_SUMMARY_SQL);
                SalarySummary::find_by_statement(stmt)
                    .one(txn)
                    .await?
                    .ok_or_else(|| DbErr::RecordNotFound("salary summary row".to_string()))
            })
        })
        .await
    }
}
