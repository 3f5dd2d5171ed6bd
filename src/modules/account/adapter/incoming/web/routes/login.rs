use crate::account::application::error::AccountError;
use crate::account::application::ports::incoming::use_cases::AuthenticateUserCommand;
use crate::api::schemas::{ErrorResponse, UserMessageResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::{error_response, UserDto};

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    #[schema(example = "pass1234")]
    pub password: Option<String>,
}

/// User login
///
/// Checks the password against the stored hash. Unknown email and wrong
/// password give the same answer.
#[utoipa::path(
    post,
    path = "/api/user/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = inline(UserMessageResponse<UserDto>)),
        (status = 400, description = "Missing or invalid credentials", body = ErrorResponse,
            example = json!({ "error": "Invalid email or password" })),
        (status = 500, description = "Internal server error", body = ErrorResponse,
            example = json!({ "error": "Internal server error" })),
    )
)]
#[post("/api/user/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = AuthenticateUserCommand {
        email: dto.email.unwrap_or_default(),
        password: dto.password.unwrap_or_default(),
    };
    let email = command.email.clone();

    info!(email = %email, "Login attempt");

    match data.account.authenticate.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, email = %user.email, "User logged in successfully");
            ApiResponse::ok_with_user("Login successful", UserDto::from(user))
        }
        // The cause stays in the log.
        Err(AccountError::Internal(cause)) => {
            error!(email = %email, error = %cause, "Login failed");
            ApiResponse::internal_error("Internal server error")
        }
        Err(err) => {
            warn!(email = %email, error = %err, "Login rejected");
            error_response(&err)
        }
    }
}
