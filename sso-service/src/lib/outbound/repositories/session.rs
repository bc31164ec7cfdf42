use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use super::user::row_to_user;
use crate::domain::errors::RepositoryError;
use crate::domain::session::models::SessionRecord;
use crate::domain::session::models::TokenHash;
use crate::domain::session::ports::SessionRepository;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn insert(&self, record: &SessionRecord) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO tokens (hash, user_id, expiry)
            VALUES ($1, $2, $3)
            ON CONFLICT (hash) DO NOTHING
            "#,
        )
        .bind(record.hash.as_bytes())
        .bind(record.user_id.0)
        .bind(record.expiry)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(RepositoryError::DuplicateSession);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn find_valid_session(
        &self,
        hash: &TokenHash,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT u.id, u.fname, u.lname, u.email, u.password_hash, u.user_role, u.activated
            FROM users u
            INNER JOIN tokens t ON t.user_id = u.id
            WHERE t.hash = $1 AND t.expiry > $2
            "#,
        )
        .bind(hash.as_bytes())
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn list_users_with_expired_sessions(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<UserId>, RepositoryError> {
        let ids: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT user_id
            FROM tokens
            WHERE expiry <= $1
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids.into_iter().map(UserId).collect())
    }

    async fn delete_all_for_user(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tokens
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.0)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
