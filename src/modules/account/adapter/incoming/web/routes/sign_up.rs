use crate::account::application::ports::incoming::use_cases::RegisterUserCommand;
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::{error_response, error_status};
use crate::account::application::error::AccountError;

/// Request body for registration. Missing keys count as empty.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Letters and spaces, at least 4 characters
    #[schema(example = "Jane Doe")]
    pub full_name: Option<String>,

    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    /// At least 8 characters with a letter and a digit
    #[schema(example = "pass1234")]
    pub password: Option<String>,

    /// Exactly 11 digits
    #[schema(example = "01234567890")]
    pub phone_number: Option<String>,
}

impl From<SignUpRequest> for RegisterUserCommand {
    fn from(req: SignUpRequest) -> Self {
        Self {
            full_name: req.full_name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
            phone_number: req.phone_number.unwrap_or_default(),
        }
    }
}

/// Register a user
#[utoipa::path(
    post,
    path = "/api/user/SignUp",
    tag = "users",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse,
            example = json!({ "message": "User registered successfully" })),
        (status = 400, description = "Missing field, invalid format or email taken", body = ErrorResponse,
            example = json!({ "error": "Email is already registered" })),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/user/SignUp")]
pub async fn sign_up_handler(
    req: web::Json<SignUpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = RegisterUserCommand::from(req.into_inner());
    let email = command.email.clone();

    info!(email = %email, "Registration attempt");

    match data.account.register.execute(command).await {
        Ok(()) => {
            info!(email = %email, "User registered successfully");
            ApiResponse::created("User registered successfully")
        }
        Err(err) => {
            if let AccountError::Internal(ref cause) = err {
                error!(email = %email, error = %cause, "Registration failed");
            } else {
                warn!(email = %email, status = %error_status(&err), error = %err, "Registration rejected");
            }
            error_response(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::application::error::{
        AccountError, ALL_FIELDS_REQUIRED, EMAIL_ALREADY_REGISTERED,
    };
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::account::application::ports::incoming::use_cases::RegisterUserUseCase;
    use crate::tests::support::stubs::StubRegisterUser;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct ExpectEmptyFields;

    #[async_trait]
    impl RegisterUserUseCase for ExpectEmptyFields {
        async fn execute(&self, command: RegisterUserCommand) -> Result<(), AccountError> {
            assert_eq!(command.full_name, "");
            assert_eq!(command.email, "jane@x.com");
            assert_eq!(command.password, "");
            assert_eq!(command.phone_number, "");
            Err(AccountError::missing_fields())
        }
    }

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "password": "pass1234",
            "phoneNumber": "01234567890"
        })
    }

    #[actix_web::test]
    async fn registers_and_returns_201_with_message_only() {
        let app_state = TestAppStateBuilder::default()
            .with_register(StubRegisterUser::ok())
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(sign_up_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/user/SignUp")
            .set_json(valid_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({ "message": "User registered successfully" })
        );
    }

    #[actix_web::test]
    async fn absent_keys_reach_the_service_as_empty() {
        let app_state = TestAppStateBuilder::default()
            .with_register(ExpectEmptyFields)
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(sign_up_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/user/SignUp")
            .set_json(serde_json::json!({ "email": "jane@x.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], ALL_FIELDS_REQUIRED);
    }

    #[actix_web::test]
    async fn duplicate_email_is_400() {
        let app_state = TestAppStateBuilder::default()
            .with_register(StubRegisterUser::failing(AccountError::DuplicateEmail(
                EMAIL_ALREADY_REGISTERED.to_string(),
            )))
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(sign_up_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/user/SignUp")
            .set_json(valid_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({ "error": "Email is already registered" })
        );
    }

    #[actix_web::test]
    async fn internal_failure_surfaces_message_with_500() {
        let app_state = TestAppStateBuilder::default()
            .with_register(StubRegisterUser::failing(AccountError::Internal(
                "Database error: connection refused".to_string(),
            )))
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(sign_up_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/user/SignUp")
            .set_json(valid_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Database error: connection refused");
    }

    #[actix_web::test]
    async fn malformed_json_is_400_with_error_key() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(sign_up_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/user/SignUp")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"fullName\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}
