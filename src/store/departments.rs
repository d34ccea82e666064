//! Department operations of the [`DirectoryStore`].

use sea_orm::{EntityTrait, NotSet, QueryOrder, Set};
use serde::Deserialize;

use super::{DirectoryStore, StoreResult};
use crate::models::department::{self, Entity as Department};

/// Input for [`DirectoryStore::add_department`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewDepartment {
    pub department_name: String,
    pub location: Option<String>,
}

impl DirectoryStore {
    /// Inserts a department and returns the id assigned by the database
    pub async fn add_department(&self, input: NewDepartment) -> StoreResult<i32> {
        let model = department::ActiveModel {
            department_id: NotSet,
            department_name: Set(input.department_name),
            location: Set(input.location),
        };
        self.scoped("add_department", move |txn| {
            Box::pin(async move {
                let inserted = Department::insert(model).exec(txn).await?;
                Ok(inserted.last_insert_id)
            })
        })
        .await
    }

    /// Lists every department ordered by name
    pub async fn list_departments(&self) -> StoreResult<Vec<department::Model>> {
        self.scoped("list_departments", |txn| {
            Box::pin(async move {
                Department::find()
                    .order_by_asc(department::Column::DepartmentName)
                    .all(txn)
                    .await
            })
        })
        .await
    }
}
