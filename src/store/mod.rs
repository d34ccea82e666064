//! # Directory Store
//!
//! The data-access layer for employees, jobs and departments. Every
//! operation runs inside [`DirectoryStore::scoped`], which begins a
//! transaction on a pooled connection, commits when the work succeeds,
//! rolls back when it fails and always hands the connection back to the
//! pool.

use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use metrics::counter;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tracing::{debug, warn};

mod departments;
mod employees;
mod error;
mod jobs;
mod reports;

pub use employees::NewEmployee;
pub use error::{StoreError, StoreResult};
pub use jobs::NewJob;
pub use departments::NewDepartment;

/// Future returned by a unit of work executed inside a scoped transaction
pub type ScopedFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, DbErr>> + Send + 'c>>;

/// Fixed catalog of read/write operations over the directory tables
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    db: DatabaseConnection,
}

impl DirectoryStore {
    /// Creates a store backed by the given connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the underlying connection pool
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Runs `work` inside a transaction.
    ///
    /// The transaction commits when `work` returns `Ok` and rolls back when it
    /// returns `Err`. Failures to begin, commit or run the work are reported
    /// as a [`StoreError`] tagged with `operation`; the database error itself
    /// is passed through untouched.
    pub async fn scoped<T, F>(&self, operation: &'static str, work: F) -> StoreResult<T>
    where
        T: Send,
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> ScopedFuture<'c, T> + Send,
    {
        let started = Instant::now();
        let txn = self.db.begin().await.map_err(|source| {
            record_outcome(operation, "connect_failed");
            warn!(operation, error = %source, "Failed to begin transaction");
            StoreError::new(operation, source)
        })?;

        let outcome = work(&txn).await;

        match outcome {
            Ok(value) => {
                txn.commit().await.map_err(|source| {
                    record_outcome(operation, "commit_failed");
                    warn!(operation, error = %source, "Failed to commit transaction");
                    StoreError::new(operation, source)
                })?;
                record_outcome(operation, "committed");
                debug!(
                    operation,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Store operation committed"
                );
                Ok(value)
            }
            Err(source) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(operation, error = %rollback_err, "Rollback failed");
                }
                record_outcome(operation, "rolled_back");
                warn!(operation, error = %source, "Store operation rolled back");
                Err(StoreError::new(operation, source))
            }
        }
    }
}

fn record_outcome(operation: &'static str, outcome: &'static str) {
    counter!(
        "directory_store_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}
