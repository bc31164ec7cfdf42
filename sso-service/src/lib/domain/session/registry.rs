use std::sync::Arc;

use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::session::models::SessionRecord;
use crate::domain::session::models::SessionStatus;
use crate::domain::session::models::TokenHash;
use crate::domain::session::ports::SessionRepository;
use crate::domain::user::models::UserId;

/// Server-side record of issued tokens.
///
/// The registry is what decides whether a token is live; the expiry
/// embedded in the signed token is not consulted here.
pub struct SessionRegistry<SR>
where
    SR: SessionRepository,
{
    repository: Arc<SR>,
    validity: Duration,
}

impl<SR> SessionRegistry<SR>
where
    SR: SessionRepository,
{
    /// # Arguments
    /// * `repository` - Session record storage
    /// * `validity` - Window from persistence to record expiry
    pub fn new(repository: Arc<SR>, validity: Duration) -> Self {
        Self {
            repository,
            validity,
        }
    }

    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Store the digest of a freshly issued token for `user_id`.
    ///
    /// Expiry is now plus the registry's window, whatever the token claims.
    ///
    /// # Errors
    /// * `TokenNotSaved` - The record could not be written
    pub async fn persist(&self, plaintext: &str, user_id: UserId) -> Result<SessionRecord, AuthError> {
        let record = SessionRecord {
            hash: TokenHash::of(plaintext),
            user_id,
            expiry: Utc::now() + self.validity,
        };

        self.repository.insert(&record).await.map_err(|e| {
            tracing::warn!(user_id = %user_id, error = %e, "Session record not saved");
            AuthError::TokenNotSaved(e)
        })?;

        tracing::debug!(user_id = %user_id, expiry = %record.expiry, "Session record saved");

        Ok(record)
    }

    /// Look up a presented token.
    ///
    /// An unknown or expired token is `Unauthenticated`, not an error.
    ///
    /// # Errors
    /// * `Storage` - The lookup itself failed
    pub async fn validate(&self, plaintext: &str) -> Result<SessionStatus, AuthError> {
        let hash = TokenHash::of(plaintext);

        let owner = self
            .repository
            .find_valid_session(&hash, Utc::now())
            .await
            .map_err(AuthError::storage("SessionRegistry.validate"))?;

        Ok(match owner {
            Some(user) => SessionStatus::Authenticated(user.id),
            None => SessionStatus::Unauthenticated,
        })
    }
}
