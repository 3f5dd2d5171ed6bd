use async_trait::async_trait;

use crate::account::application::error::AccountError;

#[derive(Debug, Clone, Default)]
pub struct RegisterUserCommand {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

/// Creates an account. Success carries no user data.
#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<(), AccountError>;
}
