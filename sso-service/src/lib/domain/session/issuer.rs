use auth::JwtError;
use auth::JwtHandler;
use auth::SessionClaims;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::tenant::models::AppSecret;
use crate::domain::tenant::models::TenantApp;
use crate::domain::user::models::User;

/// Mints and decodes session tokens signed with a tenant app's secret.
///
/// The signing key is the multi-tenancy boundary: a token issued for one
/// app does not decode with another app's secret.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenIssuer;

impl TokenIssuer {
    pub fn new() -> Self {
        Self
    }

    /// Sign a token for `user` scoped to `app`, expiring after `validity`.
    ///
    /// # Errors
    /// * `Signing` - The claims could not be signed
    pub fn issue(&self, user: &User, app: &TenantApp, validity: Duration) -> Result<String, AuthError> {
        let claims = SessionClaims::new(user.id.as_i64(), user.email.as_str(), app.id.0, validity);

        JwtHandler::new(app.secret.expose())
            .and_then(|handler| handler.encode(&claims))
            .map_err(AuthError::Signing)
    }

    /// Verify a token's signature and embedded expiry against a tenant secret.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is structurally malformed
    /// * `TokenRejected` - Expired, signed with another secret, or otherwise invalid
    pub fn decode(&self, secret: &AppSecret, token: &str) -> Result<SessionClaims, AuthError> {
        let handler = JwtHandler::new(secret.expose()).map_err(AuthError::TokenRejected)?;

        handler.decode(token).map_err(|e| match e {
            JwtError::Malformed => AuthError::InvalidToken,
            other => AuthError::TokenRejected(other),
        })
    }
}
