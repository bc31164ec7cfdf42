use tonic::Status;

use super::auth_status;
use super::require;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::IsAuthenticatedRequest;
use crate::proto::IsAuthenticatedResponse;

/// An unknown or expired token answers `is_authenticated: false` with user id 0.
pub async fn is_authenticated<S>(
    service: &S,
    request: IsAuthenticatedRequest,
) -> Result<IsAuthenticatedResponse, Status>
where
    S: AuthServicePort,
{
    require(&request.token, "token")?;

    let status = service
        .is_authenticated(&request.token)
        .await
        .map_err(|e| auth_status(e, "failed to check session"))?;

    Ok(IsAuthenticatedResponse {
        is_authenticated: status.is_authenticated(),
        user_id: status.user_id().map(|id| id.as_i64()).unwrap_or_default(),
    })
}
