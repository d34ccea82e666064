//! # Common API Types
//!
//! Response wrappers shared by the listing and creation endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wrapper for list endpoints. Results are returned whole; the directory is
/// small enough that no paging is offered.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    /// Rows in the order produced by the store
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// Body returned after a successful insert
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Identifier assigned by the database
    #[schema(example = 1)]
    pub id: i32,
}

/// A selectable entry for a form dropdown, e.g. `Engineer (ID 1)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Choice {
    pub id: i32,
    pub label: String,
}
