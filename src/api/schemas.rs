// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Plain acknowledgement
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Password updated successfully")]
    pub message: String,
}

/// Acknowledgement carrying the affected user
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct UserMessageResponse<T> {
    #[schema(example = "Login successful")]
    pub message: String,
    pub user: T,
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable reason
    #[schema(example = "All fields are required")]
    pub error: String,
}
