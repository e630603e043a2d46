//! Post and story state for the Lumen client.
//!
//! Owns the posts collection (with nested comments and like sets) and the
//! stories collection (with view sets and expiry), persisted to an
//! injected [`blob_store::BlobStore`] under the `posts` and `stories`
//! keys.

pub mod error;
pub mod models;
pub mod seed;
pub mod store;

pub use error::{ContentError, Result};
pub use models::{AuthorSnapshot, Comment, MediaItem, MediaKind, Post, Story};
pub use store::ContentStore;
