use tonic::Status;

use super::require_id;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::proto::ShowProfileRequest;
use crate::proto::ShowProfileResponse;

pub async fn show_profile<S>(
    service: &S,
    request: ShowProfileRequest,
) -> Result<ShowProfileResponse, Status>
where
    S: UserServicePort,
{
    require_id(request.id, "id")?;

    let user = service.get_user(&UserId(request.id)).await?;

    Ok(ShowProfileResponse {
        user: Some(user.into()),
    })
}
