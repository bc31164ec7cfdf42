use tonic::Status;

use super::require_id;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::proto::DeleteAccountRequest;
use crate::proto::DeleteAccountResponse;

pub async fn delete_account<S>(
    service: &S,
    request: DeleteAccountRequest,
) -> Result<DeleteAccountResponse, Status>
where
    S: UserServicePort,
{
    require_id(request.id, "id")?;

    service.delete_user(&UserId(request.id)).await?;

    Ok(DeleteAccountResponse {
        msg: "user deleted".to_string(),
    })
}
