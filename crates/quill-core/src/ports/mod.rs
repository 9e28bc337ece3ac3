//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod cache;
mod repository;
mod storage;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use cache::{Cache, CacheError};
pub use repository::{
    ContactRepository, PostPage, PostQuery, PostRepository, PostSort, PostStatusFilter,
    UserRepository,
};
pub use storage::{FileStore, StorageError, StoredFile};
