use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::errors::RepositoryError;
use crate::domain::tenant::models::AppId;
use crate::domain::tenant::models::AppSecret;
use crate::domain::tenant::models::TenantApp;
use crate::domain::tenant::ports::AppRepository;

pub struct PostgresAppRepository {
    pool: PgPool,
}

impl PostgresAppRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppRepository for PostgresAppRepository {
    async fn find_by_id(&self, id: &AppId) -> Result<Option<TenantApp>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, secret
            FROM apps
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => Ok(Some(TenantApp {
                id: AppId(r.try_get("id")?),
                name: r.try_get("name")?,
                secret: AppSecret::new(r.try_get("secret")?)
                    .map_err(|e| RepositoryError::Database(format!("Stored app row: {}", e)))?,
            })),
            None => Ok(None),
        }
    }
}
