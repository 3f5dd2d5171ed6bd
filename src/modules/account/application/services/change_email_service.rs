use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::account::application::{
    domain::validation::{require_field, validate_email},
    error::{AccountError, CURRENT_PASSWORD_INVALID, EMAIL_OWNED_BY_ANOTHER_ACCOUNT},
    ports::{
        incoming::use_cases::{ChangeEmailCommand, ChangeEmailUseCase, ChangedEmail},
        outgoing::{PasswordHasher, UserStore},
    },
};

use super::parse_user_id;

pub struct ChangeEmailService<S>
where
    S: UserStore + Send + Sync,
{
    store: S,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<S> ChangeEmailService<S>
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
impl<S> ChangeEmailUseCase for ChangeEmailService<S>
where
    S: UserStore + Send + Sync,
{
    async fn execute(&self, command: ChangeEmailCommand) -> Result<ChangedEmail, AccountError> {
        for (value, field) in [
            (&command.user_id, "userId"),
            (&command.current_password, "currentPassword"),
            (&command.new_email, "newEmail"),
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

        let password_matches = self
            .password_hasher
            .verify_password(&command.current_password, &user.password_hash)
            .await?;
        if !password_matches {
            return Err(AccountError::InvalidCredentials(
                CURRENT_PASSWORD_INVALID.to_string(),
            ));
        }

        // Ownership before syntax: a malformed address already held by
        // another account reports DuplicateEmail.
        let owner = self
            .store
            .find_by_email(&command.new_email)
            .await
            .map_err(|e| AccountError::from_store(e, EMAIL_OWNED_BY_ANOTHER_ACCOUNT))?;
        if owner.is_some_and(|owner| owner.id != user.id) {
            return Err(AccountError::DuplicateEmail(
                EMAIL_OWNED_BY_ANOTHER_ACCOUNT.to_string(),
            ));
        }

        validate_email(&command.new_email, "newEmail")?;

        user.email = command.new_email;
        let saved = self
            .store
            .save(user)
            .await
            .map_err(|e| AccountError::from_store(e, EMAIL_OWNED_BY_ANOTHER_ACCOUNT))?;

        debug!(user_id = %saved.id, "Email address updated");
        Ok(ChangedEmail { email: saved.email })
    }
}
