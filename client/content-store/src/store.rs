use std::sync::Arc;

use blob_store::{BlobStore, BlobStoreExt};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{AuthorSnapshot, Comment, MediaItem, Post, Story, STORY_TTL_HOURS};
use crate::seed;

/// Blob key holding the posts collection.
pub const POSTS_KEY: &str = "posts";
/// Blob key holding the stories collection.
pub const STORIES_KEY: &str = "stories";

/// Post and story collections, held in memory and written back to the
/// blob store as a whole snapshot after every mutation. Both collections
/// are ordered newest-first.
pub struct ContentStore {
    blobs: Arc<dyn BlobStore>,
    posts: Vec<Post>,
    stories: Vec<Story>,
}

impl ContentStore {
    /// Loads persisted state, seeding the demo content when a key is
    /// absent.
    pub fn open(blobs: Arc<dyn BlobStore>) -> Result<Self> {
        let posts = match blobs.get::<Vec<Post>>(POSTS_KEY)? {
            Some(posts) => posts,
            None => {
                let posts = seed::default_posts();
                blobs.put(POSTS_KEY, &posts)?;
                debug!(count = posts.len(), "seeded posts collection");
                posts
            }
        };
        let stories = match blobs.get::<Vec<Story>>(STORIES_KEY)? {
            Some(stories) => stories,
            None => {
                let stories = seed::default_stories();
                blobs.put(STORIES_KEY, &stories)?;
                debug!(count = stories.len(), "seeded stories collection");
                stories
            }
        };
        Ok(Self {
            blobs,
            posts,
            stories,
        })
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Posts authored by the given user, newest first.
    pub fn posts_by_author(&self, user_id: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.user_id == user_id).collect()
    }

    /// Creates a post and prepends it to the collection.
    ///
    /// Media items with blank URLs are dropped first; when both the
    /// trimmed text and the remaining media are empty the call changes
    /// nothing and returns `Ok(None)`.
    pub fn create_post(
        &mut self,
        author: &AuthorSnapshot,
        content: &str,
        media: Vec<MediaItem>,
        location: Option<&str>,
    ) -> Result<Option<Post>> {
        let content = content.trim();
        let media: Vec<MediaItem> = media
            .into_iter()
            .filter(|item| !item.url.trim().is_empty())
            .collect();
        if content.is_empty() && media.is_empty() {
            debug!("create_post skipped: no content and no media");
            return Ok(None);
        }
        let location = location
            .map(str::trim)
            .filter(|loc| !loc.is_empty())
            .map(str::to_string);

        let post = Post {
            id: Uuid::new_v4().to_string(),
            user_id: author.user_id.clone(),
            username: author.username.clone(),
            user_avatar: author.avatar.clone(),
            content: content.to_string(),
            media,
            likes: 0,
            liked_by: Vec::new(),
            comments: Vec::new(),
            timestamp: Utc::now(),
            location,
        };
        self.posts.insert(0, post.clone());
        self.persist_posts()?;
        Ok(Some(post))
    }

    /// Toggles the user's like on a post: removes it when present, adds
    /// it otherwise. Unknown post ids are ignored.
    pub fn toggle_like(&mut self, post_id: &str, user_id: &str) -> Result<()> {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            return Ok(());
        };
        if post.is_liked_by(user_id) {
            post.liked_by.retain(|id| id != user_id);
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.liked_by.push(user_id.to_string());
            post.likes += 1;
        }
        self.persist_posts()
    }

    /// Appends a comment to a post. Blank text after trimming is a
    /// silent no-op, as is an unknown post id.
    pub fn add_comment(
        &mut self,
        post_id: &str,
        author: &AuthorSnapshot,
        content: &str,
    ) -> Result<()> {
        let content = content.trim();
        if content.is_empty() {
            debug!(%post_id, "add_comment skipped: blank text");
            return Ok(());
        }
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            return Ok(());
        };
        post.comments.push(Comment {
            id: Uuid::new_v4().to_string(),
            user_id: author.user_id.clone(),
            username: author.username.clone(),
            user_avatar: author.avatar.clone(),
            content: content.to_string(),
            timestamp: Utc::now(),
            likes: 0,
        });
        self.persist_posts()
    }

    /// Creates a story expiring [`STORY_TTL_HOURS`] from now and prepends
    /// it. A blank media URL changes nothing and returns `Ok(None)`.
    pub fn create_story(
        &mut self,
        author: &AuthorSnapshot,
        media: MediaItem,
    ) -> Result<Option<Story>> {
        if media.url.trim().is_empty() {
            debug!("create_story skipped: blank media url");
            return Ok(None);
        }
        let now = Utc::now();
        let story = Story {
            id: Uuid::new_v4().to_string(),
            user_id: author.user_id.clone(),
            username: author.username.clone(),
            user_avatar: author.avatar.clone(),
            media,
            timestamp: now,
            viewed_by: Vec::new(),
            expires_at: now + Duration::hours(STORY_TTL_HOURS),
        };
        self.stories.insert(0, story.clone());
        self.persist_stories()?;
        Ok(Some(story))
    }

    /// Registers a story view. Repeat views by the same user change
    /// nothing, so the viewer set stays duplicate-free.
    pub fn view_story(&mut self, story_id: &str, user_id: &str) -> Result<()> {
        let Some(story) = self.stories.iter_mut().find(|s| s.id == story_id) else {
            return Ok(());
        };
        if story.is_viewed_by(user_id) {
            return Ok(());
        }
        story.viewed_by.push(user_id.to_string());
        self.persist_stories()
    }

    /// Stories whose expiry is still in the future, in collection order.
    /// Expired stories stay in storage; they are only filtered here.
    pub fn active_stories(&self) -> Vec<&Story> {
        self.active_stories_at(Utc::now())
    }

    pub fn active_stories_at(&self, now: DateTime<Utc>) -> Vec<&Story> {
        self.stories
            .iter()
            .filter(|story| story.is_active_at(now))
            .collect()
    }

    fn persist_posts(&self) -> Result<()> {
        self.blobs.put(POSTS_KEY, &self.posts)?;
        Ok(())
    }

    fn persist_stories(&self) -> Result<()> {
        self.blobs.put(STORIES_KEY, &self.stories)?;
        Ok(())
    }
}
