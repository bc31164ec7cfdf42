use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for profile operations on an existing user.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Apply a partial update to the user's profile.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `Password` - Hashing the new password failed
    /// * `DatabaseError` - Database operation failed
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Delete the user together with their sessions.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Insert a new user in its own transaction.
    ///
    /// # Returns
    /// Identifier assigned by storage
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Database` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<UserId, RepositoryError>;

    /// Read only the role column of a user.
    ///
    /// # Returns
    /// Optional role (None if the user does not exist)
    async fn find_role(&self, id: &UserId) -> Result<Option<Role>, RepositoryError>;

    /// Overwrite name, email and password hash of an existing user.
    ///
    /// # Returns
    /// `false` if no user has this id
    ///
    /// # Errors
    /// * `DuplicateEmail` - New email is already registered
    /// * `Database` - Database operation failed
    async fn update(&self, user: &User) -> Result<bool, RepositoryError>;

    /// Remove user from storage.
    ///
    /// # Returns
    /// `false` if no user has this id
    async fn delete(&self, id: &UserId) -> Result<bool, RepositoryError>;
}
