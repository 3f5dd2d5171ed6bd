use async_trait::async_trait;
use serde::Serialize;

use crate::account::application::error::AccountError;

#[derive(Debug, Clone, Default)]
pub struct ChangeEmailCommand {
    pub user_id: String,
    pub current_password: String,
    pub new_email: String,
}

/// The only user data echoed back after an email change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedEmail {
    pub email: String,
}

#[async_trait]
pub trait ChangeEmailUseCase: Send + Sync {
    async fn execute(&self, command: ChangeEmailCommand) -> Result<ChangedEmail, AccountError>;
}
