use async_trait::async_trait;

use crate::account::application::error::AccountError;

#[derive(Debug, Clone, Default)]
pub struct ResetPasswordCommand {
    pub user_id: String,
    pub old_password: String,
    pub new_password: String,
}

#[async_trait]
pub trait ResetPasswordUseCase: Send + Sync {
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), AccountError>;
}
