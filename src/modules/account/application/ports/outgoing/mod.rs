pub mod password_hasher;
pub mod user_store;

pub use password_hasher::{HashError, PasswordHasher};
pub use user_store::{NewUser, ProfileChanges, UserStore, UserStoreError};
