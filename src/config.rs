use argon2::Params;
use std::env;
use std::str::FromStr;

use crate::account::adapter::outgoing::security::{bcrypt_hasher::BCRYPT_COST, HashingAlgorithm};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub password_hasher: HashingAlgorithm,
    pub bcrypt_cost: u32,
    pub argon2_memory_kib: u32,
    pub argon2_iterations: u32,
    pub argon2_parallelism: u32,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads settings through `lookup`; unset and empty values take the
    /// default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            database_url,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(get("PORT"), "PORT", 3000)?,
            db_max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", 10)?,
            password_hasher: parse_or(
                get("PASSWORD_HASHER"),
                "PASSWORD_HASHER",
                HashingAlgorithm::Bcrypt,
            )?,
            bcrypt_cost: parse_or(get("BCRYPT_COST"), "BCRYPT_COST", BCRYPT_COST)?,
            argon2_memory_kib: parse_or(
                get("ARGON2_MEMORY_KIB"),
                "ARGON2_MEMORY_KIB",
                Params::DEFAULT_M_COST,
            )?,
            argon2_iterations: parse_or(
                get("ARGON2_ITERATIONS"),
                "ARGON2_ITERATIONS",
                Params::DEFAULT_T_COST,
            )?,
            argon2_parallelism: parse_or(
                get("ARGON2_PARALLELISM"),
                "ARGON2_PARALLELISM",
                Params::DEFAULT_P_COST,
            )?,
            run_migrations: parse_or(get("RUN_MIGRATIONS"), "RUN_MIGRATIONS", true)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    raw: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
