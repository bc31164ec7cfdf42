use tonic::Status;

use super::auth_status;
use super::require_id;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::UserId;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;

pub async fn is_admin<S>(service: &S, request: IsAdminRequest) -> Result<IsAdminResponse, Status>
where
    S: AuthServicePort,
{
    require_id(request.user_id, "user_id")?;

    let is_admin = service
        .is_admin(UserId(request.user_id))
        .await
        .map_err(|e| auth_status(e, "failed to check admin status"))?;

    Ok(IsAdminResponse { is_admin })
}
