use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::domain::errors::RepositoryError;
use crate::domain::tenant::models::AppId;
use crate::domain::user::errors::EmailError;
use crate::domain::user::models::UserId;

/// Error for authentication, token and session operations.
///
/// `InvalidCredentials` covers both an unknown email and a wrong password.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("App not found: {0}")]
    AppNotFound(AppId),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Token not saved: {0}")]
    TokenNotSaved(RepositoryError),

    #[error("Token is malformed")]
    InvalidToken,

    #[error("Token rejected: {0}")]
    TokenRejected(JwtError),

    #[error("Token signing failed: {0}")]
    Signing(JwtError),

    #[error("{operation}: {source}")]
    Storage {
        operation: &'static str,
        source: RepositoryError,
    },

    #[error("{operation}: {source}")]
    Hashing {
        operation: &'static str,
        source: PasswordError,
    },
}

impl AuthError {
    pub(crate) fn storage(operation: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| AuthError::Storage { operation, source }
    }

    pub(crate) fn hashing(operation: &'static str) -> impl FnOnce(PasswordError) -> Self {
        move |source| AuthError::Hashing { operation, source }
    }

    /// Whether this error is an infrastructure fault rather than a domain outcome.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AuthError::TokenNotSaved(_)
                | AuthError::Signing(_)
                | AuthError::Storage { .. }
                | AuthError::Hashing { .. }
        )
    }
}
