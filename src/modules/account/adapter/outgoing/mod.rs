pub mod sea_orm_entity;
pub mod security;
pub mod user_store_postgres;
