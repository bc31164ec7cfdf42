use tonic::Status;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;

pub mod delete_account;
pub mod edit_profile;
pub mod is_admin;
pub mod is_authenticated;
pub mod login;
pub mod register;
pub mod show_profile;

impl From<User> for crate::proto::User {
    fn from(user: User) -> Self {
        Self {
            fname: user.first_name,
            lname: user.last_name,
            email: user.email.as_str().to_string(),
            password: String::new(),
        }
    }
}

/// Reject an empty string field with "<field> is required".
pub(crate) fn require(value: &str, field: &str) -> Result<(), Status> {
    if value.is_empty() {
        return Err(Status::invalid_argument(format!("{} is required", field)));
    }
    Ok(())
}

/// Reject a zero or negative id with "<field> is required".
pub(crate) fn require_id<T>(id: T, field: &str) -> Result<(), Status>
where
    T: PartialOrd + Default,
{
    if id <= T::default() {
        return Err(Status::invalid_argument(format!("{} is required", field)));
    }
    Ok(())
}

/// Map an authentication failure to a status.
///
/// Infrastructure faults are logged and answered with `internal` only; the
/// cause never reaches the caller.
pub(crate) fn auth_status(err: AuthError, internal: &'static str) -> Status {
    match err {
        AuthError::InvalidCredentials => Status::invalid_argument("invalid email or password"),
        AuthError::UserNotFound(_) => Status::not_found("user not found"),
        AuthError::AppNotFound(_) => Status::not_found("app not found"),
        AuthError::UserExists(_) => Status::already_exists("user already exists"),
        AuthError::InvalidEmail(e) => Status::invalid_argument(e.to_string()),
        AuthError::InvalidToken | AuthError::TokenRejected(_) => {
            Status::invalid_argument("invalid token")
        }
        e => {
            tracing::error!(error = %e, "{}", internal);
            Status::internal(internal)
        }
    }
}

impl From<UserError> for Status {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidEmail(e) => Status::invalid_argument(e.to_string()),
            UserError::NotFound(_) => Status::not_found("user not found"),
            UserError::EmailAlreadyExists(_) => Status::already_exists("email already exists"),
            e @ (UserError::Password(_) | UserError::DatabaseError(_)) => {
                tracing::error!(error = %e, "Profile operation failed");
                Status::internal("internal error")
            }
        }
    }
}
