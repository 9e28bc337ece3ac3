use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment moderation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Pending,
    Approved,
    Rejected,
}

/// Reader comment on a post. Modeled for the data layer that will carry
/// it; no endpoints serve comments yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    /// Parent comment when this is a threaded reply; `None` for top-level.
    pub parent_id: Option<Uuid>,
    pub body: String,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_links_to_its_parent() {
        let post_id = Uuid::new_v4();
        let parent = Comment {
            id: Uuid::new_v4(),
            post_id,
            author_id: Uuid::new_v4(),
            parent_id: None,
            body: "Great post".into(),
            status: CommentStatus::Approved,
            created_at: Utc::now(),
        };
        let reply = Comment {
            id: Uuid::new_v4(),
            parent_id: Some(parent.id),
            ..parent.clone()
        };

        assert_eq!(reply.parent_id, Some(parent.id));
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["parent_id"], parent.id.to_string());
    }
}
