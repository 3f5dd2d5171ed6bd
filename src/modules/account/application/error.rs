use crate::account::application::{
    domain::validation::FieldError,
    ports::outgoing::{password_hasher::HashError, user_store::UserStoreError},
};

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const CREDENTIALS_REQUIRED: &str = "Email and Password are required";
pub const EMAIL_ALREADY_REGISTERED: &str = "Email is already registered";
pub const EMAIL_OWNED_BY_ANOTHER_ACCOUNT: &str =
    "Email is already registered with another account";
pub const INVALID_LOGIN: &str = "Invalid email or password";
pub const OLD_PASSWORD_INCORRECT: &str = "Old password is incorrect";
pub const CURRENT_PASSWORD_INVALID: &str = "Invalid current password";
pub const NEW_PASSWORD_RULE: &str =
    "New password must be at least 8 characters long and include both letters and numbers";

/// Failure kinds shared by every account operation.
///
/// Each variant carries the message the caller sees, so the web layer only
/// decides the status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("{0}")]
    MissingField(String),

    #[error("{0}")]
    DuplicateEmail(String),

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("{0}")]
    InvalidFormat(String),

    #[error("New password cannot be the same as the old password")]
    SamePassword,

    #[error("User not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

impl AccountError {
    pub fn missing_fields() -> Self {
        Self::MissingField(ALL_FIELDS_REQUIRED.to_string())
    }

    /// Maps a store failure, using `duplicate_message` for the unique-index
    /// conflict since the wording differs between operations.
    pub fn from_store(err: UserStoreError, duplicate_message: &str) -> Self {
        match err {
            UserStoreError::Validation(field) => Self::InvalidFormat(field.message),
            UserStoreError::DuplicateEmail => Self::DuplicateEmail(duplicate_message.to_string()),
            UserStoreError::NotFound => Self::NotFound,
            UserStoreError::Database(msg) => Self::Internal(msg),
        }
    }
}

impl From<FieldError> for AccountError {
    fn from(err: FieldError) -> Self {
        Self::InvalidFormat(err.message)
    }
}

impl From<HashError> for AccountError {
    fn from(err: HashError) -> Self {
        Self::Internal(err.to_string())
    }
}
