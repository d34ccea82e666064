//! The single error kind raised by the Directory Store.

use sea_orm::DbErr;
use thiserror::Error;

/// Raised whenever a store operation fails: constraint violations,
/// connectivity loss, or malformed input reaching the database.
///
/// The underlying database error is carried unchanged; the store performs no
/// recovery of its own.
#[derive(Debug, Error)]
#[error("{operation} failed: {source}")]
pub struct StoreError {
    operation: &'static str,
    #[source]
    source: DbErr,
}

impl StoreError {
    pub(crate) fn new(operation: &'static str, source: DbErr) -> Self {
        Self { operation, source }
    }

    /// Name of the store operation that failed (e.g. `add_employee`)
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// The database error as reported by the driver
    pub fn db_err(&self) -> &DbErr {
        &self.source
    }
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_operation_and_cause() {
        let err = StoreError::new("list_jobs", DbErr::Custom("boom".to_string()));
        let message = err.to_string();
        assert!(message.starts_with("list_jobs failed"));
        assert!(message.contains("boom"));
        assert_eq!(err.operation(), "list_jobs");
    }
}
