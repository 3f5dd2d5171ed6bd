use async_trait::async_trait;

use crate::account::application::{domain::entities::PublicUser, error::AccountError};

#[derive(Debug, Clone, Default)]
pub struct AuthenticateUserCommand {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait AuthenticateUserUseCase: Send + Sync {
    async fn execute(&self, command: AuthenticateUserCommand) -> Result<PublicUser, AccountError>;
}
