pub mod change_email;
pub mod login;
pub mod reset_password;
pub mod sign_up;
pub mod update_profile;
mod user_dto;

pub use change_email::{change_email_handler, ChangeEmailRequest, ChangedEmailDto};
pub use login::{login_handler, LoginRequest};
pub use reset_password::{reset_password_handler, ResetPasswordRequest};
pub use sign_up::{sign_up_handler, SignUpRequest};
pub use update_profile::{update_profile_handler, UpdateProfileRequest};
pub use user_dto::UserDto;

use actix_web::{http::StatusCode, web, HttpResponse};

use crate::account::application::error::AccountError;
use crate::shared::api::ApiResponse;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(sign_up_handler);
    cfg.service(login_handler);
    cfg.service(change_email_handler);
    cfg.service(reset_password_handler);
    cfg.service(update_profile_handler);
}

/// 404 for an unknown user, 500 for infrastructure failures, 400 for
/// everything the caller can fix.
pub(crate) fn error_status(err: &AccountError) -> StatusCode {
    match err {
        AccountError::NotFound => StatusCode::NOT_FOUND,
        AccountError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

pub(crate) fn error_response(err: &AccountError) -> HttpResponse {
    ApiResponse::error(error_status(err), &err.to_string())
}
