use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::account::application::{
    domain::{
        entities::{User, UserId},
        validation::{validate_email, validate_full_name, validate_phone_number},
    },
    ports::outgoing::{NewUser, ProfileChanges, UserStore, UserStoreError},
};

use super::fixtures::user_from_new;

/// `UserStore` over a map, with the same unique-email and field rules as
/// the Postgres table. The email check and the write happen under one lock.
/// Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn get(&self, id: UserId) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    fn check_fields(full_name: &str, email: &str, phone_number: &str) -> Result<(), UserStoreError> {
        validate_full_name(full_name, "fullName")?;
        validate_email(email, "email")?;
        validate_phone_number(phone_number, "phoneNumber")?;
        Ok(())
    }

    fn email_taken(users: &HashMap<UserId, User>, email: &str, except: Option<UserId>) -> bool {
        users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        Ok(self.get(id).await)
    }

    async fn create(&self, fields: NewUser) -> Result<User, UserStoreError> {
        Self::check_fields(&fields.full_name, &fields.email, &fields.phone_number)?;

        let mut users = self.users.write().await;
        if Self::email_taken(&users, &fields.email, None) {
            return Err(UserStoreError::DuplicateEmail);
        }

        let user = user_from_new(fields);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, changes: ProfileChanges) -> Result<User, UserStoreError> {
        Self::check_fields(&changes.full_name, &changes.email, &changes.phone_number)?;

        let mut users = self.users.write().await;
        if Self::email_taken(&users, &changes.email, Some(id)) {
            return Err(UserStoreError::DuplicateEmail);
        }

        let user = users.get_mut(&id).ok_or(UserStoreError::NotFound)?;
        user.full_name = changes.full_name;
        user.email = changes.email;
        user.phone_number = changes.phone_number;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn save(&self, mut user: User) -> Result<User, UserStoreError> {
        Self::check_fields(&user.full_name, &user.email, &user.phone_number)?;

        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(UserStoreError::NotFound);
        }
        if Self::email_taken(&users, &user.email, Some(user.id)) {
            return Err(UserStoreError::DuplicateEmail);
        }

        user.updated_at = Utc::now();
        users.insert(user.id, user.clone());
        Ok(user)
    }
}
