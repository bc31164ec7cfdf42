use tonic::Status;

use super::require_id;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::proto::EditProfileRequest;
use crate::proto::EditProfileResponse;

pub async fn edit_profile<S>(
    service: &S,
    request: EditProfileRequest,
) -> Result<EditProfileResponse, Status>
where
    S: UserServicePort,
{
    require_id(request.id, "id")?;
    let fields = request
        .user
        .ok_or_else(|| Status::invalid_argument("user is required"))?;

    let command =
        UpdateUserCommand::from_fields(fields.fname, fields.lname, fields.email, fields.password)
            .map_err(|e| Status::invalid_argument(e.to_string()))?;

    let user = service.update_user(&UserId(request.id), command).await?;

    Ok(EditProfileResponse {
        msg: "user updated successfully".to_string(),
        updated_user: Some(user.into()),
    })
}
