use chrono::{Duration, Utc};

use crate::models::{Comment, MediaItem, MediaKind, Post, Story, STORY_TTL_HOURS};

const AVATAR_DEMO: &str =
    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150";
const AVATAR_NATURE: &str =
    "https://images.pexels.com/photos/733872/pexels-photo-733872.jpeg?auto=compress&cs=tinysrgb&w=150";
const AVATAR_PRO: &str =
    "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150";

/// Demo posts written on first launch when the `posts` key is absent.
/// Newest first, matching the collection ordering.
pub fn default_posts() -> Vec<Post> {
    let now = Utc::now();
    vec![
        Post {
            id: "1".into(),
            user_id: "1".into(),
            username: "demo_user".into(),
            user_avatar: AVATAR_DEMO.into(),
            content: "Perfect day for a photo walk".into(),
            media: vec![MediaItem {
                id: "1".into(),
                kind: MediaKind::Image,
                url: "https://images.pexels.com/photos/1055613/pexels-photo-1055613.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
                thumbnail: None,
            }],
            likes: 2,
            liked_by: vec!["2".into(), "3".into()],
            comments: vec![Comment {
                id: "1".into(),
                user_id: "3".into(),
                username: "photographer_pro".into(),
                user_avatar: AVATAR_PRO.into(),
                content: "Incredible shot!".into(),
                timestamp: now - Duration::hours(1),
                likes: 0,
            }],
            timestamp: now - Duration::hours(2),
            location: Some("Moscow, Russia".into()),
        },
        Post {
            id: "2".into(),
            user_id: "2".into(),
            username: "nature_lover".into(),
            user_avatar: AVATAR_NATURE.into(),
            content: "Sunset in the mountains. Nature never stops inspiring".into(),
            media: vec![MediaItem {
                id: "2".into(),
                kind: MediaKind::Image,
                url: "https://images.pexels.com/photos/417074/pexels-photo-417074.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
                thumbnail: None,
            }],
            likes: 2,
            liked_by: vec!["1".into(), "3".into()],
            comments: Vec::new(),
            timestamp: now - Duration::hours(4),
            location: None,
        },
    ]
}

/// Demo stories written on first launch when the `stories` key is absent.
/// Each expires [`STORY_TTL_HOURS`] after its creation instant.
pub fn default_stories() -> Vec<Story> {
    let now = Utc::now();
    let first_created = now - Duration::hours(1);
    let second_created = now - Duration::hours(2);
    vec![
        Story {
            id: "1".into(),
            user_id: "1".into(),
            username: "demo_user".into(),
            user_avatar: AVATAR_DEMO.into(),
            media: MediaItem {
                id: "1".into(),
                kind: MediaKind::Image,
                url: "https://images.pexels.com/photos/1055613/pexels-photo-1055613.jpeg?auto=compress&cs=tinysrgb&w=400".into(),
                thumbnail: None,
            },
            timestamp: first_created,
            viewed_by: vec!["2".into()],
            expires_at: first_created + Duration::hours(STORY_TTL_HOURS),
        },
        Story {
            id: "2".into(),
            user_id: "2".into(),
            username: "nature_lover".into(),
            user_avatar: AVATAR_NATURE.into(),
            media: MediaItem {
                id: "2".into(),
                kind: MediaKind::Image,
                url: "https://images.pexels.com/photos/417074/pexels-photo-417074.jpeg?auto=compress&cs=tinysrgb&w=400".into(),
                thumbnail: None,
            },
            timestamp: second_created,
            viewed_by: vec!["1".into()],
            expires_at: second_created + Duration::hours(STORY_TTL_HOURS),
        },
    ]
}
