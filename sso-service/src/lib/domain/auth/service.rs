use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::verifier::CredentialVerifier;
use crate::domain::errors::RepositoryError;
use crate::domain::session::issuer::TokenIssuer;
use crate::domain::session::models::SessionStatus;
use crate::domain::session::ports::SessionRepository;
use crate::domain::session::registry::SessionRegistry;
use crate::domain::tenant::models::AppId;
use crate::domain::tenant::ports::AppRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Orchestrates credential checks, token issuance and session bookkeeping.
pub struct AuthService<UR, AR, SR>
where
    UR: UserRepository,
    AR: AppRepository,
    SR: SessionRepository,
{
    users: Arc<UR>,
    apps: Arc<AR>,
    sessions: SessionRegistry<SR>,
    verifier: CredentialVerifier,
    issuer: TokenIssuer,
    token_ttl: Duration,
}

impl<UR, AR, SR> AuthService<UR, AR, SR>
where
    UR: UserRepository,
    AR: AppRepository,
    SR: SessionRepository,
{
    /// # Arguments
    /// * `users` - Credential store for accounts
    /// * `apps` - Tenant app lookup
    /// * `sessions` - Registry that persists issued tokens
    /// * `token_ttl` - Expiry embedded in issued tokens
    pub fn new(
        users: Arc<UR>,
        apps: Arc<AR>,
        sessions: SessionRegistry<SR>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            apps,
            sessions,
            verifier: CredentialVerifier::new(),
            issuer: TokenIssuer::new(),
            token_ttl,
        }
    }
}

#[async_trait]
impl<UR, AR, SR> AuthServicePort for AuthService<UR, AR, SR>
where
    UR: UserRepository,
    AR: AppRepository,
    SR: SessionRepository,
{
    async fn login(
        &self,
        email: &str,
        password: &str,
        app_id: AppId,
    ) -> Result<String, AuthError> {
        tracing::info!(op = "auth.login", app_id = %app_id, "Attempting to login user");

        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(AuthError::storage("auth.login"))?
            .ok_or_else(|| {
                tracing::warn!(op = "auth.login", "User not found");
                AuthError::InvalidCredentials
            })?;

        let matches = self
            .verifier
            .verify(&user.password_hash, password)
            .await
            .map_err(AuthError::hashing("auth.login"))?;

        if !matches {
            tracing::info!(op = "auth.login", user_id = %user.id, "Invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let app = self
            .apps
            .find_by_id(&app_id)
            .await
            .map_err(AuthError::storage("auth.login"))?
            .ok_or(AuthError::AppNotFound(app_id))?;

        let token = self.issuer.issue(&user, &app, self.token_ttl)?;
        self.sessions.persist(&token, user.id).await?;

        tracing::info!(
            op = "auth.login",
            user_id = %user.id,
            app_id = %app.id,
            "User logged in successfully"
        );

        Ok(token)
    }

    async fn register_new_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserId, AuthError> {
        tracing::info!(op = "auth.register_new_user", "Registering user");

        let email = EmailAddress::new(email.to_string())?;

        let password_hash = self
            .verifier
            .hash(password)
            .await
            .map_err(AuthError::hashing("auth.register_new_user"))?;

        let new_user = NewUser {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email,
            password_hash,
            role: Role::User,
            activated: false,
        };

        let user_id = self.users.create(new_user).await.map_err(|e| match e {
            RepositoryError::DuplicateEmail(email) => {
                tracing::warn!(op = "auth.register_new_user", "User already exists");
                AuthError::UserExists(email)
            }
            other => AuthError::Storage {
                operation: "auth.register_new_user",
                source: other,
            },
        })?;

        tracing::info!(op = "auth.register_new_user", user_id = %user_id, "User registered");

        Ok(user_id)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        tracing::debug!(op = "auth.is_admin", user_id = %user_id, "Checking if user is admin");

        let role = self
            .users
            .find_role(&user_id)
            .await
            .map_err(AuthError::storage("auth.is_admin"))?
            .ok_or(AuthError::UserNotFound(user_id))?;

        Ok(role.is_admin())
    }

    async fn is_authenticated(&self, token: &str) -> Result<SessionStatus, AuthError> {
        let status = self.sessions.validate(token).await?;

        tracing::debug!(
            op = "auth.is_authenticated",
            authenticated = status.is_authenticated(),
            "Checked session"
        );

        Ok(status)
    }
}
