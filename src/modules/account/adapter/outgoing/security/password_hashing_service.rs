//! Configured hasher plus verification of hashes written by either
//! supported algorithm.
//!
//! New hashes always use the configured algorithm. Verification picks the
//! algorithm from the stored hash prefix (`$argon2` or bcrypt's `$2`), so
//! switching `PASSWORD_HASHER` does not lock anyone out.

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

use crate::account::application::ports::outgoing::{HashError, PasswordHasher};

use super::{Argon2Hasher, BcryptHasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashingAlgorithm {
    #[default]
    Bcrypt,
    Argon2,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown password hasher '{0}', expected 'bcrypt' or 'argon2'")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for HashingAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bcrypt" => Ok(Self::Bcrypt),
            "argon2" | "argon2id" => Ok(Self::Argon2),
            other => Err(UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for HashingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bcrypt => write!(f, "bcrypt"),
            Self::Argon2 => write!(f, "argon2"),
        }
    }
}

#[derive(Clone)]
pub struct PasswordHashingService {
    algorithm: HashingAlgorithm,
    bcrypt: BcryptHasher,
    argon2: Argon2Hasher,
}

impl PasswordHashingService {
    pub fn new(algorithm: HashingAlgorithm, bcrypt: BcryptHasher, argon2: Argon2Hasher) -> Self {
        Self {
            algorithm,
            bcrypt,
            argon2,
        }
    }

    pub fn algorithm(&self) -> HashingAlgorithm {
        self.algorithm
    }

    fn algorithm_of(hash: &str) -> HashingAlgorithm {
        if hash.starts_with("$argon2") {
            HashingAlgorithm::Argon2
        } else {
            HashingAlgorithm::Bcrypt
        }
    }
}

#[async_trait]
impl PasswordHasher for PasswordHashingService {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        match self.algorithm {
            HashingAlgorithm::Bcrypt => self.bcrypt.hash_password(password).await,
            HashingAlgorithm::Argon2 => self.argon2.hash_password(password).await,
        }
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        match Self::algorithm_of(hash) {
            HashingAlgorithm::Bcrypt => self.bcrypt.verify_password(password, hash).await,
            HashingAlgorithm::Argon2 => self.argon2.verify_password(password, hash).await,
        }
    }
}
