use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::account::application::{
    domain::validation::{
        require_field, validate_email, validate_full_name, validate_password,
        validate_phone_number,
    },
    error::{AccountError, EMAIL_ALREADY_REGISTERED},
    ports::{
        incoming::use_cases::{RegisterUserCommand, RegisterUserUseCase},
        outgoing::{NewUser, PasswordHasher, UserStore},
    },
};

pub struct RegisterUserService<S>
where
    S: UserStore + Send + Sync,
{
    store: S,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<S> RegisterUserService<S>
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
impl<S> RegisterUserUseCase for RegisterUserService<S>
where
    S: UserStore + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<(), AccountError> {
        // 1. Presence
        for (value, field) in [
            (&command.full_name, "fullName"),
            (&command.email, "email"),
            (&command.password, "password"),
            (&command.phone_number, "phoneNumber"),
        ] {
            require_field(value, field).map_err(|_| AccountError::missing_fields())?;
        }

        // 2. Uniqueness pre-check
        let existing = self
            .store
            .find_by_email(&command.email)
            .await
            .map_err(|e| AccountError::from_store(e, EMAIL_ALREADY_REGISTERED))?;
        if existing.is_some() {
            return Err(AccountError::DuplicateEmail(
                EMAIL_ALREADY_REGISTERED.to_string(),
            ));
        }

        // 3. Field rules. Password complexity can only be checked on the
        // plaintext, so the whole record is checked before hashing.
        validate_full_name(&command.full_name, "fullName")?;
        validate_email(&command.email, "email")?;
        validate_password(&command.password, "password")?;
        validate_phone_number(&command.phone_number, "phoneNumber")?;

        // 4. Hash
        let password_hash = self
            .password_hasher
            .hash_password(&command.password)
            .await?;

        // 5. Persist; a concurrent registration surfaces here as DuplicateEmail
        let user = self
            .store
            .create(NewUser {
                full_name: command.full_name,
                email: command.email,
                password_hash,
                phone_number: command.phone_number,
            })
            .await
            .map_err(|e| AccountError::from_store(e, EMAIL_ALREADY_REGISTERED))?;

        debug!(user_id = %user.id, email = %user.email, "User registered");
        Ok(())
    }
}
