use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::tenant::models::AppId;
use crate::domain::tenant::models::TenantApp;

/// Read access to tenant app records.
#[async_trait]
pub trait AppRepository: Send + Sync + 'static {
    /// Retrieve a tenant app with its signing secret.
    ///
    /// # Returns
    /// Optional app (None if not found)
    async fn find_by_id(&self, id: &AppId) -> Result<Option<TenantApp>, RepositoryError>;
}
