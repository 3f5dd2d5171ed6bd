use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::account::application::{
    domain::validation::{require_field, validate_password},
    error::{AccountError, EMAIL_OWNED_BY_ANOTHER_ACCOUNT, NEW_PASSWORD_RULE, OLD_PASSWORD_INCORRECT},
    ports::{
        incoming::use_cases::{ResetPasswordCommand, ResetPasswordUseCase},
        outgoing::{PasswordHasher, UserStore},
    },
};

use super::parse_user_id;

pub struct ResetPasswordService<S>
where
    S: UserStore + Send + Sync,
{
    store: S,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<S> ResetPasswordService<S>
where
    S: UserStore + Send + Sync,
{
    pub fn new(store: S, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            store,
            password_hasher,
        }
    }
}

#[async_trait]
impl<S> ResetPasswordUseCase for ResetPasswordService<S>
where
    S: UserStore + Send + Sync,
{
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), AccountError> {
        for (value, field) in [
            (&command.user_id, "userId"),
            (&command.old_password, "oldPassword"),
            (&command.new_password, "newPassword"),
        ] {
            require_field(value, field).map_err(|_| AccountError::missing_fields())?;
        }

        let user_id = parse_user_id(&command.user_id)?;
        let mut user = self
            .store
            .find_by_id(user_id)
            .await
            .map_err(|e| AccountError::from_store(e, EMAIL_OWNED_BY_ANOTHER_ACCOUNT))?
            .ok_or(AccountError::NotFound)?;

        let old_matches = self
            .password_hasher
            .verify_password(&command.old_password, &user.password_hash)
            .await?;
        if !old_matches {
            return Err(AccountError::InvalidCredentials(
                OLD_PASSWORD_INCORRECT.to_string(),
            ));
        }

        // Compared against the stored hash, before the new one is computed.
        let unchanged = self
            .password_hasher
            .verify_password(&command.new_password, &user.password_hash)
            .await?;
        if unchanged {
            return Err(AccountError::SamePassword);
        }

        validate_password(&command.new_password, "newPassword")
            .map_err(|_| AccountError::InvalidFormat(NEW_PASSWORD_RULE.to_string()))?;

        user.password_hash = self
            .password_hasher
            .hash_password(&command.new_password)
            .await?;

        let saved = self
            .store
            .save(user)
            .await
            .map_err(|e| AccountError::from_store(e, EMAIL_OWNED_BY_ANOTHER_ACCOUNT))?;

        debug!(user_id = %saved.id, "Password updated");
        Ok(())
    }
}
