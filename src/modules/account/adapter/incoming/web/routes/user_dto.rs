use serde::Serialize;
use utoipa::ToSchema;

use crate::account::application::domain::entities::PublicUser;

/// User as returned by the API. Carries no password material.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "Jane Doe")]
    pub full_name: String,

    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "01234567890")]
    pub phone_number: String,

    pub created_at: String,

    pub updated_at: String,
}

impl From<PublicUser> for UserDto {
    fn from(user: PublicUser) -> Self {
        Self {
            id: user.id.to_string(),
            full_name: user.full_name,
            email: user.email,
            phone_number: user.phone_number,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}
