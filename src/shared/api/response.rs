// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct UserMessageBody<'a, T: Serialize> {
    message: &'a str,
    user: T,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Builders for the three body shapes the API speaks:
/// `{message}`, `{message, user}` and `{error}`.
pub struct ApiResponse;

impl ApiResponse {
    pub fn message(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(MessageBody { message })
    }

    pub fn ok(message: &str) -> HttpResponse {
        Self::message(StatusCode::OK, message)
    }

    pub fn created(message: &str) -> HttpResponse {
        Self::message(StatusCode::CREATED, message)
    }

    pub fn ok_with_user<T: Serialize>(message: &str, user: T) -> HttpResponse {
        HttpResponse::Ok().json(UserMessageBody { message, user })
    }

    pub fn error(status: StatusCode, error: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody { error })
    }

    pub fn bad_request(error: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, error)
    }

    pub fn internal_error(error: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, error)
    }
}
