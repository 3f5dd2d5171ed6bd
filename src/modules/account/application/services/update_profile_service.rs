use async_trait::async_trait;
use tracing::debug;

use crate::account::application::{
    domain::{
        entities::{PublicUser, UserId},
        validation::{require_field, validate_phone_number},
    },
    error::{AccountError, EMAIL_OWNED_BY_ANOTHER_ACCOUNT},
    ports::{
        incoming::use_cases::{UpdateProfileCommand, UpdateProfileUseCase},
        outgoing::{ProfileChanges, UserStore},
    },
};

use super::parse_user_id;

pub struct UpdateProfileService<S>
where
    S: UserStore + Send + Sync,
{
    store: S,
}

impl<S> UpdateProfileService<S>
where
    S: UserStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> UpdateProfileUseCase for UpdateProfileService<S>
where
    S: UserStore + Send + Sync,
{
    async fn execute(&self, command: UpdateProfileCommand) -> Result<PublicUser, AccountError> {
        for (value, field) in [
            (&command.full_name, "fullName"),
            (&command.email, "email"),
            (&command.phone_number, "phoneNumber"),
        ] {
            require_field(value, field).map_err(|_| AccountError::missing_fields())?;
        }

        validate_phone_number(&command.phone_number, "phoneNumber")?;

        // Resolved lazily: an unknown id is reported only at the write step.
        let user_id: Result<UserId, AccountError> = parse_user_id(&command.user_id);

        let owner = self
            .store
            .find_by_email(&command.email)
            .await
            .map_err(|e| AccountError::from_store(e, EMAIL_OWNED_BY_ANOTHER_ACCOUNT))?;
        if let Some(owner) = owner {
            if user_id.as_ref().ok() != Some(&owner.id) {
                return Err(AccountError::DuplicateEmail(
                    EMAIL_OWNED_BY_ANOTHER_ACCOUNT.to_string(),
                ));
            }
        }

        let updated = self
            .store
            .update(
                user_id?,
                ProfileChanges {
                    full_name: command.full_name,
                    email: command.email,
                    phone_number: command.phone_number,
                },
            )
            .await
            .map_err(|e| AccountError::from_store(e, EMAIL_OWNED_BY_ANOTHER_ACCOUNT))?;

        debug!(user_id = %updated.id, "Profile updated");
        Ok(updated.into())
    }
}
