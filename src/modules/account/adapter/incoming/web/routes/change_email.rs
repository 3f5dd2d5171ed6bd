use crate::account::application::error::AccountError;
use crate::account::application::ports::incoming::use_cases::ChangeEmailCommand;
use crate::api::schemas::{ErrorResponse, UserMessageResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::error_response;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEmailRequest {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: Option<String>,

    #[schema(example = "pass1234")]
    pub current_password: Option<String>,

    #[schema(example = "jane.new@example.com")]
    pub new_email: Option<String>,
}

/// The only user field echoed after an email change
#[derive(Serialize, ToSchema)]
pub struct ChangedEmailDto {
    #[schema(example = "jane.new@example.com")]
    pub email: String,
}

/// Change the login email after checking the current password
#[utoipa::path(
    put,
    path = "/api/user/change-email",
    tag = "users",
    request_body = ChangeEmailRequest,
    responses(
        (status = 200, description = "Email updated", body = inline(UserMessageResponse<ChangedEmailDto>),
            example = json!({
                "message": "Email address updated successfully",
                "user": { "email": "jane.new@example.com" }
            })),
        (status = 400, description = "Missing field, wrong password, invalid or taken email", body = ErrorResponse,
            example = json!({ "error": "Email is already registered with another account" })),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/user/change-email")]
pub async fn change_email_handler(
    req: web::Json<ChangeEmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = ChangeEmailCommand {
        user_id: dto.user_id.unwrap_or_default(),
        current_password: dto.current_password.unwrap_or_default(),
        new_email: dto.new_email.unwrap_or_default(),
    };
    let user_id = command.user_id.clone();

    info!(user_id = %user_id, new_email = %command.new_email, "Email change attempt");

    match data.account.change_email.execute(command).await {
        Ok(changed) => {
            info!(user_id = %user_id, email = %changed.email, "Email address updated successfully");
            ApiResponse::ok_with_user(
                "Email address updated successfully",
                ChangedEmailDto {
                    email: changed.email,
                },
            )
        }
        Err(err) => {
            if let AccountError::Internal(ref cause) = err {
                error!(user_id = %user_id, error = %cause, "Email change failed");
            } else {
                warn!(user_id = %user_id, error = %err, "Email change rejected");
            }
            error_response(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::application::error::{
        CURRENT_PASSWORD_INVALID, EMAIL_OWNED_BY_ANOTHER_ACCOUNT,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubChangeEmail;
    use actix_web::{test, App};

    async fn call(stub: StubChangeEmail) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_change_email(stub)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(change_email_handler)).await;

        let req = test::TestRequest::put()
            .uri("/api/user/change-email")
            .set_json(serde_json::json!({
                "userId": uuid::Uuid::new_v4().to_string(),
                "currentPassword": "pass1234",
                "newEmail": "jane.new@x.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn echoes_only_the_new_email() {
        let (status, body) = call(StubChangeEmail::ok("jane.new@x.com")).await;

        assert_eq!(status, 200);
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Email address updated successfully",
                "user": { "email": "jane.new@x.com" }
            })
        );
    }

    #[actix_web::test]
    async fn taken_email_is_400() {
        let (status, body) = call(StubChangeEmail::failing(AccountError::DuplicateEmail(
            EMAIL_OWNED_BY_ANOTHER_ACCOUNT.to_string(),
        )))
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"], EMAIL_OWNED_BY_ANOTHER_ACCOUNT);
    }

    #[actix_web::test]
    async fn wrong_password_is_400() {
        let (status, body) = call(StubChangeEmail::failing(AccountError::InvalidCredentials(
            CURRENT_PASSWORD_INVALID.to_string(),
        )))
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"], "Invalid current password");
    }

    #[actix_web::test]
    async fn unknown_user_is_404() {
        let (status, _) = call(StubChangeEmail::failing(AccountError::NotFound)).await;

        assert_eq!(status, 404);
    }
}
