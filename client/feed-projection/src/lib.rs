//! Derived, non-persisted views over the content and social graph state.
//!
//! Pure functions only: the projection owns no state and mutates nothing.

use chrono::{DateTime, Utc};
use content_store::{Post, Story};
use identity_store::User;

/// Posts visible to the viewer: their own plus those from accounts they
/// follow. Order is inherited from the posts collection (newest first);
/// no pagination, no ranking.
pub fn visible_posts<'a>(viewer: &User, posts: &'a [Post]) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| {
            post.user_id == viewer.id
                || viewer.following_list.iter().any(|id| *id == post.user_id)
        })
        .collect()
}

/// An active story plus whether the viewer has already seen it.
#[derive(Debug, Clone)]
pub struct StoryTile<'a> {
    pub story: &'a Story,
    pub viewed: bool,
}

/// The story ring: active stories in collection order, each tagged with
/// the viewer's seen state.
pub fn story_tiles<'a>(
    viewer: &User,
    stories: &'a [Story],
    now: DateTime<Utc>,
) -> Vec<StoryTile<'a>> {
    stories
        .iter()
        .filter(|story| story.is_active_at(now))
        .map(|story| StoryTile {
            story,
            viewed: story.is_viewed_by(&viewer.id),
        })
        .collect()
}
