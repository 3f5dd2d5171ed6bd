use crate::account::application::error::AccountError;
use crate::account::application::ports::incoming::use_cases::UpdateProfileCommand;
use crate::api::schemas::{ErrorResponse, UserMessageResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::{error_response, UserDto};

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[schema(example = "Jane Smith")]
    pub full_name: Option<String>,

    #[schema(example = "jane.smith@example.com")]
    pub email: Option<String>,

    /// Exactly 11 digits
    #[schema(example = "01234567890")]
    pub phone_number: Option<String>,
}

/// Replace name, email and phone number of a user
#[utoipa::path(
    put,
    path = "/api/user/update-profile/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID (UUID)")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = inline(UserMessageResponse<UserDto>)),
        (status = 400, description = "Missing field, invalid format or email taken", body = ErrorResponse,
            example = json!({ "error": "Phone number must be 11 digits" })),
        (status = 404, description = "User not found", body = ErrorResponse,
            example = json!({ "error": "User not found" })),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/user/update-profile/{id}")]
pub async fn update_profile_handler(
    path: web::Path<String>,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let dto = req.into_inner();
    let command = UpdateProfileCommand {
        user_id: user_id.clone(),
        full_name: dto.full_name.unwrap_or_default(),
        email: dto.email.unwrap_or_default(),
        phone_number: dto.phone_number.unwrap_or_default(),
    };

    info!(user_id = %user_id, "Profile update attempt");

    match data.account.update_profile.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, "Profile updated successfully");
            ApiResponse::ok_with_user("Profile updated successfully", UserDto::from(user))
        }
        Err(err) => {
            if let AccountError::Internal(ref cause) = err {
                error!(user_id = %user_id, error = %cause, "Profile update failed");
            } else {
                warn!(user_id = %user_id, error = %err, "Profile update rejected");
            }
            error_response(&err)
        }
    }
}
