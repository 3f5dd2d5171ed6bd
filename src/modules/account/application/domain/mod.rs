pub mod entities;
pub mod validation;
