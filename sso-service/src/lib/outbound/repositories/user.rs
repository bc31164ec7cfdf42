use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::errors::RepositoryError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a `users` row selected with the standard column list.
pub(crate) fn row_to_user(row: &PgRow) -> Result<User, RepositoryError> {
    let role: String = row.try_get("user_role")?;
    let email: String = row.try_get("email")?;

    Ok(User {
        id: UserId(row.try_get("id")?),
        first_name: row.try_get("fname")?,
        last_name: row.try_get("lname")?,
        email: EmailAddress::new(email)
            .map_err(|e| RepositoryError::Database(format!("Stored user row: {}", e)))?,
        role: role
            .parse::<Role>()
            .map_err(|e| RepositoryError::Database(format!("Stored user row: {}", e)))?,
        activated: row.try_get("activated")?,
        password_hash: row.try_get("password_hash")?,
    })
}

fn map_write_error(e: sqlx::Error, email: &EmailAddress) -> RepositoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
            return RepositoryError::DuplicateEmail(email.as_str().to_string());
        }
    }
    RepositoryError::Database(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, fname, lname, email, password_hash, user_role, activated
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, fname, lname, email, password_hash, user_role, activated
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<UserId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (fname, lname, email, password_hash, user_role, activated)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.activated)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &user.email))?;

        tx.commit().await?;

        Ok(UserId(id))
    }

    async fn find_role(&self, id: &UserId) -> Result<Option<Role>, RepositoryError> {
        let role: Option<String> = sqlx::query_scalar(
            r#"
            SELECT user_role
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        role.map(|r| {
            r.parse::<Role>()
                .map_err(|e| RepositoryError::Database(format!("Stored user row: {}", e)))
        })
        .transpose()
    }

    async fn update(&self, user: &User) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET fname = $2, lname = $3, email = $4, password_hash = $5
            WHERE id = $1
            "#,
        )
        .bind(user.id.0)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &user.email))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
