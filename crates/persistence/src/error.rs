// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use job_board_domain::DomainError;
use thiserror::Error;

/// Failures reported by the persistence adapter.
///
/// Only `NotFound`, `UniqueViolation` and `JobReferenced` carry business
/// meaning. The rest are storage faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Could not connect to the database: {0}")]
    DatabaseConnectionFailed(String),
    #[error("Schema migration failed: {0}")]
    MigrationFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// A stored column no longer maps onto its domain type.
    #[error("Stored value is invalid: {0}")]
    InvalidStoredValue(String),
    #[error("Database could not be initialized: {0}")]
    InitializationError(String),
    #[error("Foreign key enforcement is disabled on this connection")]
    ForeignKeyEnforcementNotEnabled,
    /// A unique index rejected an insert or update.
    #[error("Duplicate value: {0}")]
    UniqueViolation(String),
    /// Applications still point at the job.
    #[error("Job {job_id} still has applications")]
    JobReferenced { job_id: i64 },
    #[error("{0}")]
    NotFound(String),
}

impl From<DieselError> for PersistenceError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => Self::NotFound(String::from("Record not found")),
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::UniqueViolation(String::from(info.message()))
            }
            other => Self::DatabaseError(other.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::InvalidStoredValue(err.to_string())
    }
}
