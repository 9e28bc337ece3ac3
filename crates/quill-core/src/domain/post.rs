use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a blog post owned by its authoring user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    /// URL-safe unique identifier (`^[a-z0-9-]+$`, enforced at the boundary).
    pub slug: String,
    pub published: bool,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new unpublished-by-default post with fresh id and timestamps.
    pub fn new(author_id: Uuid, title: String, content: String, slug: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            content,
            slug,
            published: false,
            excerpt: None,
            category: None,
            tags: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Ownership check: only the authoring user may mutate a post.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }
}
