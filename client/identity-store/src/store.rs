use std::sync::Arc;

use blob_store::{BlobStore, BlobStoreExt};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::gateway::{AuthGateway, GatewayError};
use crate::models::{NewUser, ProfilePatch, User};
use crate::seed;

/// Blob key holding the session user (a `User` object or `null`).
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Blob key holding the registered users collection.
pub const USERS_KEY: &str = "users";
/// Blob key holding the bearer token between login and logout.
pub const TOKEN_KEY: &str = "token";

/// Identity and social graph state: the users collection and the session
/// user, held in memory and written back to the blob store as a whole
/// snapshot after every mutation.
pub struct IdentityStore {
    blobs: Arc<dyn BlobStore>,
    gateway: Arc<dyn AuthGateway>,
    users: Vec<User>,
    session: Option<User>,
}

impl IdentityStore {
    /// Loads persisted state, seeding the demo accounts when the `users`
    /// key is absent.
    pub fn open(blobs: Arc<dyn BlobStore>, gateway: Arc<dyn AuthGateway>) -> Result<Self> {
        let users = match blobs.get::<Vec<User>>(USERS_KEY)? {
            Some(users) => users,
            None => {
                let users = seed::default_users();
                blobs.put(USERS_KEY, &users)?;
                debug!(count = users.len(), "seeded users collection");
                users
            }
        };
        let session = blobs.get::<Option<User>>(CURRENT_USER_KEY)?.flatten();
        Ok(Self {
            blobs,
            gateway,
            users,
            session,
        })
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The cached bearer token, if a login is in effect.
    pub fn token(&self) -> Result<Option<String>> {
        Ok(self.blobs.get::<String>(TOKEN_KEY)?)
    }

    /// Authenticates against the credential endpoints.
    ///
    /// `Ok(false)` covers both rejected credentials and transport
    /// failures; transport failures are logged once and never retried.
    /// State is only mutated on success.
    pub async fn login(&mut self, identifier: &str, secret: &str) -> Result<bool> {
        let token = match self.gateway.request_token(identifier, secret).await {
            Ok(token) => token,
            Err(GatewayError::Rejected) => return Ok(false),
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, "login token exchange failed");
                return Ok(false);
            }
        };
        self.blobs.put(TOKEN_KEY, &token)?;

        let user = match self.gateway.fetch_current_user(&token).await {
            Ok(user) => user,
            Err(GatewayError::Rejected) => return Ok(false),
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, "authenticated profile fetch failed");
                return Ok(false);
            }
        };
        self.set_session(Some(user))?;
        Ok(true)
    }

    /// Registers a new account locally.
    ///
    /// `Ok(false)` when the username or email is already taken
    /// (case-sensitive exact match); the collection is left unchanged.
    /// On success the new account becomes the session user.
    pub fn register(&mut self, profile: NewUser) -> Result<bool> {
        let taken = self
            .users
            .iter()
            .any(|u| u.email == profile.email || u.username == profile.username);
        if taken {
            debug!(username = %profile.username, "registration rejected: duplicate");
            return Ok(false);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: profile.username,
            email: profile.email,
            full_name: profile.full_name,
            avatar: profile.avatar,
            bio: profile.bio,
            followers: 0,
            following: 0,
            posts: 0,
            following_list: Vec::new(),
            followers_list: Vec::new(),
        };
        self.users.push(user.clone());
        self.blobs.put(USERS_KEY, &self.users)?;
        self.set_session(Some(user))?;
        Ok(true)
    }

    /// Clears the session user and the cached bearer token.
    pub fn logout(&mut self) -> Result<()> {
        self.set_session(None)?;
        self.blobs.remove(TOKEN_KEY)?;
        Ok(())
    }

    /// Merges the given fields into the session user and the matching
    /// record in the users collection. No-op without a session.
    pub fn update_profile(&mut self, patch: ProfilePatch) -> Result<()> {
        let Some(mut user) = self.session.clone() else {
            return Ok(());
        };
        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(full_name) = patch.full_name {
            user.full_name = full_name;
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = avatar;
        }
        if let Some(bio) = patch.bio {
            user.bio = bio;
        }

        if let Some(existing) = self.users.iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
        }
        self.blobs.put(USERS_KEY, &self.users)?;
        self.set_session(Some(user))
    }

    /// Records a directed follow edge from the session user to `target_id`.
    ///
    /// Both sides of the relationship are updated in one pass over the
    /// users collection, and the session user is refreshed from the
    /// resulting snapshot. No-op without a session or on self-follow; a
    /// target missing from the collection leaves only the session side
    /// updated. A repeat follow appends a duplicate edge and bumps the
    /// counter again, so the counter can drift ahead of the distinct set.
    pub fn follow(&mut self, target_id: &str) -> Result<()> {
        let Some(session_id) = self.session.as_ref().map(|u| u.id.clone()) else {
            return Ok(());
        };
        if target_id == session_id {
            return Ok(());
        }
        if self.is_following(target_id) {
            warn!(%target_id, "follow repeated for an already-followed user");
        }

        for user in &mut self.users {
            if user.id == session_id {
                user.following_list.push(target_id.to_string());
                user.following += 1;
            } else if user.id == target_id {
                user.followers_list.push(session_id.clone());
                user.followers += 1;
            }
        }
        self.persist_users_and_refresh_session(&session_id)
    }

    /// Removes the follow edge from both sides, stripping every
    /// occurrence of the id and flooring the counters at zero.
    pub fn unfollow(&mut self, target_id: &str) -> Result<()> {
        let Some(session_id) = self.session.as_ref().map(|u| u.id.clone()) else {
            return Ok(());
        };
        if target_id == session_id {
            return Ok(());
        }

        for user in &mut self.users {
            if user.id == session_id {
                user.following_list.retain(|id| id != target_id);
                user.following = user.following.saturating_sub(1);
            } else if user.id == target_id {
                user.followers_list.retain(|id| id != &session_id);
                user.followers = user.followers.saturating_sub(1);
            }
        }
        self.persist_users_and_refresh_session(&session_id)
    }

    /// Membership test against the session user's following list.
    pub fn is_following(&self, target_id: &str) -> bool {
        self.session
            .as_ref()
            .map(|u| u.following_list.iter().any(|id| id == target_id))
            .unwrap_or(false)
    }

    /// Case-insensitive substring search over username and full name,
    /// excluding the session user. A blank query matches nothing.
    pub fn search_users(&self, query: &str) -> Vec<&User> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let session_id = self.session.as_ref().map(|u| u.id.as_str());
        self.users
            .iter()
            .filter(|u| Some(u.id.as_str()) != session_id)
            .filter(|u| {
                u.username.to_lowercase().contains(&query)
                    || u.full_name.to_lowercase().contains(&query)
            })
            .collect()
    }

    fn set_session(&mut self, user: Option<User>) -> Result<()> {
        self.blobs.put(CURRENT_USER_KEY, &user)?;
        self.session = user;
        Ok(())
    }

    fn persist_users_and_refresh_session(&mut self, session_id: &str) -> Result<()> {
        self.blobs.put(USERS_KEY, &self.users)?;
        if let Some(updated) = self.users.iter().find(|u| u.id == session_id).cloned() {
            self.set_session(Some(updated))?;
        }
        Ok(())
    }
}
