use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::delete_account;
use super::handlers::edit_profile;
use super::handlers::show_profile;
use crate::domain::user::ports::UserServicePort;
use crate::proto::user_profile_server::UserProfile;
use crate::proto::DeleteAccountRequest;
use crate::proto::DeleteAccountResponse;
use crate::proto::EditProfileRequest;
use crate::proto::EditProfileResponse;
use crate::proto::ShowProfileRequest;
use crate::proto::ShowProfileResponse;

pub struct ProfileGrpcService<S>
where
    S: UserServicePort,
{
    service: Arc<S>,
}

impl<S> ProfileGrpcService<S>
where
    S: UserServicePort,
{
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<S> UserProfile for ProfileGrpcService<S>
where
    S: UserServicePort,
{
    async fn edit_profile(
        &self,
        request: Request<EditProfileRequest>,
    ) -> Result<Response<EditProfileResponse>, Status> {
        let response =
            edit_profile::edit_profile(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn delete_account(
        &self,
        request: Request<DeleteAccountRequest>,
    ) -> Result<Response<DeleteAccountResponse>, Status> {
        let response =
            delete_account::delete_account(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn show_profile(
        &self,
        request: Request<ShowProfileRequest>,
    ) -> Result<Response<ShowProfileResponse>, Status> {
        let response =
            show_profile::show_profile(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }
}
