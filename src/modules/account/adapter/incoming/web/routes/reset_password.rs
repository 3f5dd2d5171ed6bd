use crate::account::application::error::AccountError;
use crate::account::application::ports::incoming::use_cases::ResetPasswordCommand;
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::error_response;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: Option<String>,

    #[schema(example = "pass1234")]
    pub old_password: Option<String>,

    /// At least 8 characters with a letter and a digit
    #[schema(example = "newpass99")]
    pub new_password: Option<String>,
}

/// Change password after checking the old one
#[utoipa::path(
    put,
    path = "/api/user/reset-password",
    tag = "users",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse,
            example = json!({ "message": "Password updated successfully" })),
        (status = 400, description = "Missing field, wrong old password or weak new password", body = ErrorResponse,
            example = json!({ "error": "New password cannot be the same as the old password" })),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/user/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = ResetPasswordCommand {
        user_id: dto.user_id.unwrap_or_default(),
        old_password: dto.old_password.unwrap_or_default(),
        new_password: dto.new_password.unwrap_or_default(),
    };
    let user_id = command.user_id.clone();

    info!(user_id = %user_id, "Password reset attempt");

    match data.account.reset_password.execute(command).await {
        Ok(()) => {
            info!(user_id = %user_id, "Password updated successfully");
            ApiResponse::ok("Password updated successfully")
        }
        Err(err) => {
            if let AccountError::Internal(ref cause) = err {
                error!(user_id = %user_id, error = %cause, "Password reset failed");
            } else {
                warn!(user_id = %user_id, error = %err, "Password reset rejected");
            }
            error_response(&err)
        }
    }
}
