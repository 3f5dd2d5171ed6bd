use async_trait::async_trait;

use crate::account::application::{domain::entities::PublicUser, error::AccountError};

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand) -> Result<PublicUser, AccountError>;
}
