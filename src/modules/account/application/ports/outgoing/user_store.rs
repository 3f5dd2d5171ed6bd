use async_trait::async_trait;

use crate::account::application::domain::{
    entities::{User, UserId},
    validation::FieldError,
};

/// Fields for a user that does not exist yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileChanges {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    #[error("{0}")]
    Validation(#[from] FieldError),

    /// The unique index on `email` rejected the write.
    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

/// Persistent collection of users with a unique index on email.
///
/// `create`, `update` and `save` re-check the field rules of the values they
/// write and report a rejected unique index as
/// [`UserStoreError::DuplicateEmail`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError>;

    async fn create(&self, fields: NewUser) -> Result<User, UserStoreError>;

    /// Fails with [`UserStoreError::NotFound`] when `id` is absent.
    async fn update(&self, id: UserId, changes: ProfileChanges) -> Result<User, UserStoreError>;

    /// Persists a user fetched earlier and mutated in place.
    async fn save(&self, user: User) -> Result<User, UserStoreError>;
}
