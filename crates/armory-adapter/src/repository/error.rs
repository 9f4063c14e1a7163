//! Database error types.

use armory_domain::RepositoryError;
use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Error, Debug)]
pub enum DbError {
    /// Database connection error.
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Query execution error.
    #[error("Query error: {0}")]
    Query(String),

    /// Constraint violation (e.g., unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A stored value could not be mapped back into the domain.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Pool exhausted.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Invalid configuration.
    #[error("Invalid database configuration: {0}")]
    Configuration(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation()
                    || db_err.is_check_violation()
                    || db_err.is_foreign_key_violation()
                {
                    DbError::Constraint(db_err.message().to_string())
                } else {
                    DbError::Query(db_err.message().to_string())
                }
            }
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::Connection("pool closed".to_string()),
            sqlx::Error::Io(e) => DbError::Connection(e.to_string()),
            sqlx::Error::Configuration(msg) => DbError::Configuration(msg.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                DbError::Serialization(err.to_string())
            }
            _ => DbError::Query(err.to_string()),
        }
    }
}

impl From<DbError> for RepositoryError {
    fn from(err: DbError) -> Self {
        RepositoryError::persistence(err.to_string())
    }
}
