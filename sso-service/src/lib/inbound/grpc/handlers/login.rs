use tonic::Status;

use super::auth_status;
use super::require;
use super::require_id;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::tenant::models::AppId;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S>(service: &S, request: LoginRequest) -> Result<LoginResponse, Status>
where
    S: AuthServicePort,
{
    require(&request.email, "email")?;
    require(&request.password, "password")?;
    require_id(request.app_id, "app_id")?;

    let token = service
        .login(&request.email, &request.password, AppId(request.app_id))
        .await
        .map_err(|e| auth_status(e, "failed to login"))?;

    Ok(LoginResponse { token })
}
