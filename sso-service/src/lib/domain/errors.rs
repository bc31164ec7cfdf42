use thiserror::Error;

/// Failure reported by a storage adapter.
///
/// A missing row is not an error: finders return `Option`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    #[error("Session record with the same hash already exists")]
    DuplicateSession,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Database(err.to_string())
    }
}
