use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use content_store::{Post, Story};
use identity_store::{AuthGateway, GatewayError, User};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// Token exchange response from `POST /token`.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Payload for `POST /api/posts/{id}/comment`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub content: String,
}

/// Registration payload for `POST /register`. Field names follow the
/// backend's snake_case schema.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    pub bio: String,
    pub password: String,
}

/// Summary row from `GET /users` and `POST /register`: profile fields
/// plus server-derived relationship counts.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub followers_count: u32,
    #[serde(default)]
    pub following_count: u32,
}

/// Typed client for the backend feed API.
#[derive(Clone)]
pub struct HttpApiClient {
    http: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            debug!(%status, url = %response.url(), "backend rejected request");
            Err(ApiError::Status(status))
        }
    }

    /// `POST /token` — form-encoded credential exchange.
    pub async fn request_token(&self, username: &str, password: &str) -> Result<String> {
        let response = self
            .http
            .post(self.url("/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        let token: TokenResponse = Self::check(response)?.json().await?;
        Ok(token.access_token)
    }

    /// `GET /users/me` — the authenticated identity.
    pub async fn fetch_current_user(&self, token: &str) -> Result<User> {
        let response = self
            .http
            .get(self.url("/users/me"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }

    /// `POST /register` — creates an account server-side.
    pub async fn register_user(&self, request: &RegisterRequest) -> Result<UserSummary> {
        let response = self
            .http
            .post(self.url("/register"))
            .json(request)
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }

    /// `GET /users` — all registered users with relationship counts.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let response = self.http.get(self.url("/users")).send().await?;
        Ok(Self::check(response)?.json().await?)
    }

    /// `GET /api/posts?userId=` — posts for the user's feed.
    pub async fn fetch_posts(&self, user_id: &str) -> Result<Vec<Post>> {
        let response = self
            .http
            .get(self.url("/api/posts"))
            .query(&[("userId", user_id)])
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }

    /// `GET /api/stories?userId=` — stories for the user's ring.
    pub async fn fetch_stories(&self, user_id: &str) -> Result<Vec<Story>> {
        let response = self
            .http
            .get(self.url("/api/stories"))
            .query(&[("userId", user_id)])
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }

    /// `POST /api/posts/{id}/like` — returns the updated post.
    pub async fn like_post(&self, post_id: &str, user_id: &str) -> Result<Post> {
        let response = self
            .http
            .post(self.url(&format!("/api/posts/{post_id}/like")))
            .json(&serde_json::json!({ "userId": user_id }))
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }

    /// `POST /api/posts/{id}/comment` — returns the updated post.
    pub async fn comment_post(&self, post_id: &str, request: &CommentRequest) -> Result<Post> {
        let response = self
            .http
            .post(self.url(&format!("/api/posts/{post_id}/comment")))
            .json(request)
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }

    /// `POST /api/stories/{id}/view` — returns the updated story.
    pub async fn view_story(&self, story_id: &str, user_id: &str) -> Result<Story> {
        let response = self
            .http
            .post(self.url(&format!("/api/stories/{story_id}/view")))
            .json(&serde_json::json!({ "userId": user_id }))
            .send()
            .await?;
        Ok(Self::check(response)?.json().await?)
    }
}

/// The identity store's login seam, backed by the real endpoints. Any
/// non-2xx status counts as a rejection; everything else is transport.
#[async_trait]
impl AuthGateway for HttpApiClient {
    async fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> std::result::Result<String, GatewayError> {
        match HttpApiClient::request_token(self, username, password).await {
            Ok(token) => Ok(token),
            Err(ApiError::Status(_)) => Err(GatewayError::Rejected),
            Err(ApiError::Transport(err)) => Err(GatewayError::Transport(err.to_string())),
        }
    }

    async fn fetch_current_user(&self, token: &str) -> std::result::Result<User, GatewayError> {
        match HttpApiClient::fetch_current_user(self, token).await {
            Ok(user) => Ok(user),
            Err(ApiError::Status(_)) => Err(GatewayError::Rejected),
            Err(ApiError::Transport(err)) => Err(GatewayError::Transport(err.to_string())),
        }
    }
}
