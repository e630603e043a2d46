use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stories expire a fixed day after creation.
pub const STORY_TTL_HOURS: i64 = 24;

/// Media attachment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Immutable media attachment on a post or story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Author fields captured by value at creation time; posts, comments and
/// stories keep this snapshot rather than a live user reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSnapshot {
    pub user_id: String,
    pub username: String,
    pub avatar: String,
}

/// Comment on a post. Append-only; never reordered or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Part of the stored layout; no operation ever advances it.
    pub likes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub content: String,
    pub media: Vec<MediaItem>,
    pub likes: u32,
    #[serde(default)]
    pub liked_by: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Post {
    /// Whether the given user currently likes this post.
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.liked_by.iter().any(|id| id == user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub media: MediaItem,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub viewed_by: Vec<String>,
    pub expires_at: DateTime<Utc>,
}

impl Story {
    /// Active while the expiry instant is strictly in the future.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub fn is_viewed_by(&self, user_id: &str) -> bool {
        self.viewed_by.iter().any(|id| id == user_id)
    }
}
