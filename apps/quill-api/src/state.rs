//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{
    Cache, ContactRepository, FileStore, PasswordService, PostRepository, TokenService,
    UserRepository,
};
use quill_infra::{
    Argon2PasswordService, InMemoryCache, JwtTokenService, LocalFileStore,
    PostgresContactRepository, PostgresPostRepository, PostgresUserRepository, connect,
};

use crate::config::AppConfig;

/// Shared application state. Every dependency sits behind its port trait
/// so tests can swap in doubles.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub users: Arc<dyn UserRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub cache: Arc<dyn Cache>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    pub files: Arc<dyn FileStore>,
}

impl AppState {
    /// Wire up concrete implementations from configuration.
    pub async fn build(config: &AppConfig) -> Result<Self, quill_infra::database::DbErr> {
        let db = connect(&config.database).await?;

        let state = Self {
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            contacts: Arc::new(PostgresContactRepository::new(db)),
            cache: Arc::new(InMemoryCache::new()),
            tokens: Arc::new(JwtTokenService::from_env()),
            passwords: Arc::new(Argon2PasswordService::new()),
            files: Arc::new(LocalFileStore::new(
                config.upload_dir.clone(),
                config.storage_url.clone(),
            )),
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }
}
