//! Database connection management and SeaORM repositories.

mod connections;
pub mod entity;
mod repos;

pub use connections::{DatabaseConfig, connect};
pub use sea_orm::DbErr;
pub use repos::{PostgresContactRepository, PostgresPostRepository, PostgresUserRepository};
