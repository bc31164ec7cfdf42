//! mockall doubles for the domain ports, shared by the unit tests.

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use mockall::mock;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::errors::RepositoryError;
use crate::domain::session::models::SessionRecord;
use crate::domain::session::models::SessionStatus;
use crate::domain::session::models::TokenHash;
use crate::domain::session::ports::SessionRepository;
use crate::domain::tenant::models::AppId;
use crate::domain::tenant::models::AppSecret;
use crate::domain::tenant::models::TenantApp;
use crate::domain::tenant::ports::AppRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

mock! {
    pub TestUserRepository {}

    #[async_trait]
    impl UserRepository for TestUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
        async fn create(&self, user: NewUser) -> Result<UserId, RepositoryError>;
        async fn find_role(&self, id: &UserId) -> Result<Option<Role>, RepositoryError>;
        async fn update(&self, user: &User) -> Result<bool, RepositoryError>;
        async fn delete(&self, id: &UserId) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub TestAppRepository {}

    #[async_trait]
    impl AppRepository for TestAppRepository {
        async fn find_by_id(&self, id: &AppId) -> Result<Option<TenantApp>, RepositoryError>;
    }
}

mock! {
    pub TestSessionRepository {}

    #[async_trait]
    impl SessionRepository for TestSessionRepository {
        async fn insert(&self, record: &SessionRecord) -> Result<(), RepositoryError>;
        async fn find_valid_session(&self, hash: &TokenHash, now: DateTime<Utc>) -> Result<Option<User>, RepositoryError>;
        async fn list_users_with_expired_sessions(&self, now: DateTime<Utc>) -> Result<Vec<UserId>, RepositoryError>;
        async fn delete_all_for_user(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub TestAuthService {}

    #[async_trait]
    impl AuthServicePort for TestAuthService {
        async fn login(&self, email: &str, password: &str, app_id: AppId) -> Result<String, AuthError>;
        async fn register_new_user(&self, first_name: &str, last_name: &str, email: &str, password: &str) -> Result<UserId, AuthError>;
        async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
        async fn is_authenticated(&self, token: &str) -> Result<SessionStatus, AuthError>;
    }
}

mock! {
    pub TestUserService {}

    #[async_trait]
    impl UserServicePort for TestUserService {
        async fn get_user(&self, id: &UserId) -> Result<User, UserError>;
        async fn update_user(&self, id: &UserId, command: UpdateUserCommand) -> Result<User, UserError>;
        async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
    }
}

pub fn user_with_hash(id: i64, email: &str, password_hash: &str) -> User {
    User {
        id: UserId(id),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        role: Role::User,
        activated: false,
        password_hash: password_hash.to_string(),
    }
}

pub fn user(id: i64) -> User {
    user_with_hash(id, "ada@example.com", "$argon2id$old_hash")
}

pub fn tenant_app(id: i32, secret: &str) -> TenantApp {
    TenantApp {
        id: AppId(id),
        name: format!("app-{}", id),
        secret: AppSecret::new(secret.to_string()).unwrap(),
    }
}
