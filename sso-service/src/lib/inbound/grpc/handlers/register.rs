use tonic::Status;

use super::auth_status;
use super::require;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S>(service: &S, request: RegisterRequest) -> Result<RegisterResponse, Status>
where
    S: AuthServicePort,
{
    require(&request.fname, "first name")?;
    require(&request.lname, "last name")?;
    require(&request.email, "email")?;
    require(&request.password, "password")?;

    let user_id = service
        .register_new_user(
            &request.fname,
            &request.lname,
            &request.email,
            &request.password,
        )
        .await
        .map_err(|e| auth_status(e, "failed to register user"))?;

    Ok(RegisterResponse {
        user_id: user_id.as_i64(),
    })
}
