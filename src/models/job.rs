//! Job entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Job entity as stored in the `jobs` table.
///
/// The salary bounds are informational only; nothing requires
/// `min_salary <= max_salary`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "jobs")]
#[schema(as = Job)]
pub struct Model {
    #[sea_orm(primary_key)]
    #[schema(example = 1)]
    pub job_id: i32,

    #[schema(example = "Engineer")]
    pub job_title: String,

    #[schema(example = 50000.0)]
    pub min_salary: Option<f64>,

    #[schema(example = 90000.0)]
    pub max_salary: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee::Entity")]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
