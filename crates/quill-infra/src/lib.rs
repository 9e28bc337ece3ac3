//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! PostgreSQL repositories via SeaORM, JWT tokens, Argon2 password
//! hashing, the in-memory page cache, local file storage for uploads,
//! and the preview HTML sanitizer.

pub mod auth;
pub mod cache;
pub mod database;
pub mod sanitize;
pub mod storage;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use cache::InMemoryCache;
pub use database::{
    DatabaseConfig, PostgresContactRepository, PostgresPostRepository, PostgresUserRepository,
    connect,
};
pub use storage::LocalFileStore;
