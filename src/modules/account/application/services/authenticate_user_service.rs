use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::account::application::{
    domain::{entities::PublicUser, validation::require_field},
    error::{AccountError, CREDENTIALS_REQUIRED, EMAIL_ALREADY_REGISTERED, INVALID_LOGIN},
    ports::{
        incoming::use_cases::{AuthenticateUserCommand, AuthenticateUserUseCase},
        outgoing::{PasswordHasher, UserStore},
    },
};

pub struct AuthenticateUserService<S>
where
    S: UserStore + Send + Sync,
{
    store: S,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<S> AuthenticateUserService<S>
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
impl<S> AuthenticateUserUseCase for AuthenticateUserService<S>
where
    S: UserStore + Send + Sync,
{
    async fn execute(&self, command: AuthenticateUserCommand) -> Result<PublicUser, AccountError> {
        require_field(&command.email, "email")
            .and_then(|_| require_field(&command.password, "password"))
            .map_err(|_| AccountError::MissingField(CREDENTIALS_REQUIRED.to_string()))?;

        // Unknown email and wrong password produce the same error.
        let Some(user) = self
            .store
            .find_by_email(&command.email)
            .await
            .map_err(|e| AccountError::from_store(e, EMAIL_ALREADY_REGISTERED))?
        else {
            return Err(AccountError::InvalidCredentials(INVALID_LOGIN.to_string()));
        };

        let matches = self
            .password_hasher
            .verify_password(&command.password, &user.password_hash)
            .await?;
        if !matches {
            return Err(AccountError::InvalidCredentials(INVALID_LOGIN.to_string()));
        }

        debug!(user_id = %user.id, "User authenticated");
        Ok(user.into())
    }
}
