use chrono::Utc;

use crate::account::application::{
    domain::entities::{User, UserId},
    ports::outgoing::NewUser,
};

/// A valid stored user with the given email and password hash.
pub fn sample_user(email: &str, password_hash: &str) -> User {
    let now = Utc::now();
    User {
        id: UserId::new(),
        full_name: "Jane Doe".to_string(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        phone_number: "01234567890".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// What a store hands back after inserting `fields`.
pub fn user_from_new(fields: NewUser) -> User {
    let now = Utc::now();
    User {
        id: UserId::new(),
        full_name: fields.full_name,
        email: fields.email,
        password_hash: fields.password_hash,
        phone_number: fields.phone_number,
        created_at: now,
        updated_at: now,
    }
}
