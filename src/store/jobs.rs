//! Job operations of the [`DirectoryStore`].

use sea_orm::{EntityTrait, NotSet, QueryOrder, Set};
use serde::Deserialize;
use tracing::warn;

use super::{DirectoryStore, StoreResult};
use crate::models::job::{self, Entity as Job};

/// Input for [`DirectoryStore::add_job`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewJob {
    pub job_title: String,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
}

impl NewJob {
    /// True when both bounds are present and the minimum exceeds the maximum
    pub fn has_inverted_bounds(&self) -> bool {
        matches!((self.min_salary, self.max_salary), (Some(min), Some(max)) if min > max)
    }
}

impl DirectoryStore {
    /// Inserts a job and returns the id assigned by the database.
    ///
    /// Inverted salary bounds are stored as given.
    pub async fn add_job(&self, input: NewJob) -> StoreResult<i32> {
        if input.has_inverted_bounds() {
            warn!(
                job_title = %input.job_title,
                min_salary = ?input.min_salary,
                max_salary = ?input.max_salary,
                "Job minimum salary exceeds maximum salary"
            );
        }

        let model = job::ActiveModel {
            job_id: NotSet,
            job_title: Set(input.job_title),
            min_salary: Set(input.min_salary),
            max_salary: Set(input.max_salary),
        };
        self.scoped("add_job", move |txn| {
            Box::pin(async move {
                let inserted = Job::insert(model).exec(txn).await?;
                Ok(inserted.last_insert_id)
            })
        })
        .await
    }

    /// Lists every job ordered by title
    pub async fn list_jobs(&self) -> StoreResult<Vec<job::Model>> {
        self.scoped("list_jobs", |txn| {
            Box::pin(async move {
                Job::find()
                    .order_by_asc(job::Column::JobTitle)
                    .all(txn)
                    .await
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_bounds_detection() {
        let mut job = NewJob {
            job_title: "Engineer".to_string(),
            min_salary: Some(90000.0),
            max_salary: Some(50000.0),
        };
        assert!(job.has_inverted_bounds());

        job.max_salary = None;
        assert!(!job.has_inverted_bounds());

        job.max_salary = Some(90000.0);
        assert!(!job.has_inverted_bounds());
    }
}
