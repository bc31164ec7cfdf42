use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::session::models::SessionStatus;
use crate::domain::tenant::models::AppId;
use crate::domain::user::models::UserId;

/// Port for the authentication operations exposed to transports.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Check credentials and issue a session token scoped to `app_id`.
    ///
    /// # Returns
    /// Signed token; its digest has been persisted before it is returned
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `AppNotFound` - No tenant app with this id
    /// * `TokenNotSaved` - The session record could not be written
    async fn login(&self, email: &str, password: &str, app_id: AppId)
        -> Result<String, AuthError>;

    /// Create a regular, not yet activated account.
    ///
    /// # Errors
    /// * `InvalidEmail` - Email fails validation
    /// * `UserExists` - Email is already registered
    async fn register_new_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserId, AuthError>;

    /// # Errors
    /// * `UserNotFound` - No user with this id
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;

    /// Check a presented token against the session registry.
    ///
    /// Unknown and expired tokens are `Unauthenticated`, not errors.
    async fn is_authenticated(&self, token: &str) -> Result<SessionStatus, AuthError>;
}
