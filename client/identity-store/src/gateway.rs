use async_trait::async_trait;
use thiserror::Error;

use crate::models::User;

/// Credential endpoint failures. Rejection and transport problems are
/// split so `login` can log the latter while returning `false` for both.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("credentials rejected")]
    Rejected,

    #[error("transport error: {0}")]
    Transport(String),
}

/// The backend credential endpoints consumed by
/// [`crate::store::IdentityStore::login`]. Implemented over HTTP by the
/// api-client crate; mocked in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// `POST /token` — exchanges credentials for a bearer token.
    async fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> std::result::Result<String, GatewayError>;

    /// `GET /users/me` — resolves the authenticated identity.
    async fn fetch_current_user(&self, token: &str) -> std::result::Result<User, GatewayError>;
}
