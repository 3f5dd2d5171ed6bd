pub mod argon2_hasher;
pub mod bcrypt_hasher;
pub mod password_hashing_service;

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;
pub use password_hashing_service::{HashingAlgorithm, PasswordHashingService};
