use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::session::models::SessionRecord;
use crate::domain::session::models::TokenHash;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Persistence operations for session records.
#[async_trait]
pub trait SessionRepository: Send + Sync + 'static {
    /// Store a new record atomically, refusing a hash that already exists.
    ///
    /// # Errors
    /// * `DuplicateSession` - A record with this hash exists
    /// * `Database` - Database operation failed
    async fn insert(&self, record: &SessionRecord) -> Result<(), RepositoryError>;

    /// Find the owner of a record with this hash whose expiry is after `now`.
    ///
    /// # Returns
    /// Owning user (None if no such record, or it has expired)
    async fn find_valid_session(
        &self,
        hash: &TokenHash,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, RepositoryError>;

    /// Distinct ids of users owning at least one record expired at `now`.
    async fn list_users_with_expired_sessions(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<UserId>, RepositoryError>;

    /// Remove every record owned by the user, expired or not.
    ///
    /// # Returns
    /// Number of removed records
    async fn delete_all_for_user(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
}
