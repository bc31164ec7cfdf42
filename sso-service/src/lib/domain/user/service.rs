use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::verifier::CredentialVerifier;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Profile management for registered users.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    verifier: CredentialVerifier,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            verifier: CredentialVerifier::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(*id))
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self.get_user(id).await?;

        if let Some(first_name) = command.first_name {
            user.first_name = first_name;
        }

        if let Some(last_name) = command.last_name {
            user.last_name = last_name;
        }

        if let Some(email) = command.email {
            user.email = email;
        }

        if let Some(password) = command.password {
            user.password_hash = self.verifier.hash(&password).await.map_err(|e| {
                tracing::error!(user_id = %id, error = %e, "Failed to generate password hash");
                e
            })?;
        }

        if !self.repository.update(&user).await? {
            return Err(UserError::NotFound(*id));
        }

        tracing::info!(user_id = %id, "User profile updated");

        Ok(user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(*id));
        }

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
