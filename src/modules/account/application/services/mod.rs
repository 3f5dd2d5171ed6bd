mod authenticate_user_service;
mod change_email_service;
mod register_user_service;
mod reset_password_service;
mod update_profile_service;

pub use authenticate_user_service::AuthenticateUserService;
pub use change_email_service::ChangeEmailService;
pub use register_user_service::RegisterUserService;
pub use reset_password_service::ResetPasswordService;
pub use update_profile_service::UpdateProfileService;

use crate::account::application::{domain::entities::UserId, error::AccountError};

/// An id that does not parse cannot name a stored user.
fn parse_user_id(raw: &str) -> Result<UserId, AccountError> {
    raw.parse().map_err(|_| AccountError::NotFound)
}
