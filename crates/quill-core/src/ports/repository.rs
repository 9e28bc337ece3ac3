use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{ContactMessage, Post, User};
use crate::error::RepoError;

/// Sort order for post listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSort {
    /// Newest first (created_at descending).
    #[default]
    Latest,
    /// Oldest first (created_at ascending).
    Oldest,
    /// Lexical by title.
    Title,
}

/// Publication filter for post listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostStatusFilter {
    #[default]
    All,
    Published,
    Draft,
}

/// Query object for paginated post listings.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    /// 1-based page number.
    pub page: u64,
    /// Records per page.
    pub limit: u64,
    /// Free-text search over title and content.
    pub search: Option<String>,
    /// Restrict to one category (exact match).
    pub category: Option<String>,
    pub sort: PostSort,
    pub status: PostStatusFilter,
    /// Restrict to a single author (dashboard listings).
    pub author_id: Option<Uuid>,
}

impl PostQuery {
    /// Offset of the first record for this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.limit
    }
}

/// One page of posts plus the total match count.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: u64,
}

/// Post persistence.
///
/// `insert` and `update` are separate operations so a unique-slug violation
/// on insert can be reported as a conflict rather than a generic failure.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    async fn list(&self, query: &PostQuery) -> Result<PostPage, RepoError>;

    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Hard delete. `RepoError::NotFound` when no row was removed.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// User persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    async fn insert(&self, user: User) -> Result<User, RepoError>;
}

/// Contact message persistence. Public submissions only create records;
/// status transitions belong to staff tooling outside this service.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, message: ContactMessage) -> Result<ContactMessage, RepoError>;
}
