/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
///
/// Two kinds cover the whole data-access surface: writes rejected by a
/// uniqueness constraint, and everything else that prevents an operation
/// from affecting the rows it must affect.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Write rejected by the `username`/`email` uniqueness constraint
    #[error("unique constraint violated: {0}")]
    ConstraintViolation(String),

    /// Statement failure, connectivity failure, or a required-effect
    /// operation that affected zero rows
    #[error("storage operation failed: {0}")]
    OperationFailed(String),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::ConstraintViolation(db_err.message().to_string());
            }
        }
        Self::OperationFailed(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Migration(err.to_string())
    }
}
