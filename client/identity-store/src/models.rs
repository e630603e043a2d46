use serde::{Deserialize, Serialize};

/// Registered account with its denormalized social counters.
///
/// Field names follow the persisted JSON layout (camelCase keys under the
/// `users` and `currentUser` blobs). The relationship lists deserialize to
/// empty when a stored record omits them, so downstream code can assume
/// well-formed lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    pub bio: String,
    pub followers: u32,
    pub following: u32,
    pub posts: u32,
    /// Ids of users this account follows. Duplicates are possible, see
    /// [`crate::store::IdentityStore::follow`].
    #[serde(default)]
    pub following_list: Vec<String>,
    /// Ids of users following this account.
    #[serde(default)]
    pub followers_list: Vec<String>,
}

/// Profile fields supplied at registration; the id, counters and
/// relationship lists are synthesized by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    pub bio: String,
}

/// Partial profile edit; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}
