//! Identity and social graph state for the Lumen client.
//!
//! Owns the registered users collection and the session user, persists
//! both to an injected [`blob_store::BlobStore`], and exposes the
//! login/register/profile/follow surface consumed by the presentation
//! layer.

pub mod error;
pub mod gateway;
pub mod models;
pub mod seed;
pub mod store;

pub use error::{IdentityError, Result};
pub use gateway::{AuthGateway, GatewayError};
pub use models::{NewUser, ProfilePatch, User};
pub use store::IdentityStore;
