use crate::api::schemas::{ErrorResponse, MessageResponse};
use utoipa::OpenApi;

use crate::account::adapter::incoming::web::routes::{
    ChangeEmailRequest, ChangedEmailDto, LoginRequest, ResetPasswordRequest, SignUpRequest,
    UpdateProfileRequest, UserDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account Service API",
        version = "1.0.0",
        description = "User registration, login and account maintenance"
    ),
    paths(
        crate::account::adapter::incoming::web::routes::sign_up::sign_up_handler,
        crate::account::adapter::incoming::web::routes::login::login_handler,
        crate::account::adapter::incoming::web::routes::update_profile::update_profile_handler,
        crate::account::adapter::incoming::web::routes::reset_password::reset_password_handler,
        crate::account::adapter::incoming::web::routes::change_email::change_email_handler,
    ),
    components(
        schemas(
            MessageResponse,
            ErrorResponse,
            SignUpRequest,
            LoginRequest,
            UpdateProfileRequest,
            ResetPasswordRequest,
            ChangeEmailRequest,
            UserDto,
            ChangedEmailDto
        )
    ),
    tags(
        (name = "users", description = "Account endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_account_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/user/SignUp",
            "/api/user/login",
            "/api/user/update-profile/{id}",
            "/api/user/reset-password",
            "/api/user/change-email",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }
}
