pub mod account_use_cases;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
