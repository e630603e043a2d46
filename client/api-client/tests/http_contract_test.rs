//! Wire-level contract tests: each endpoint is mocked and the request
//! shape (method, path, encoding, auth header) plus response decoding is
//! pinned down.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api_client::{ApiConfig, ApiError, CommentRequest, HttpApiClient};

fn client_for(server: &MockServer) -> HttpApiClient {
    HttpApiClient::new(ApiConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn post_body(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "userId": "1",
        "username": "demo_user",
        "userAvatar": "",
        "content": "hello",
        "media": [
            {"id": "m1", "type": "image", "url": "https://example.com/a.jpg"}
        ],
        "likes": 1,
        "likedBy": ["2"],
        "comments": [],
        "timestamp": "2024-01-01T12:00:00Z"
    })
}

fn story_body(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "userId": "1",
        "username": "demo_user",
        "userAvatar": "",
        "media": {"id": "m1", "type": "image", "url": "https://example.com/s.jpg"},
        "timestamp": "2024-01-01T12:00:00Z",
        "viewedBy": ["2"],
        "expiresAt": "2024-01-02T12:00:00Z"
    })
}

#[tokio::test]
async fn token_exchange_posts_form_encoded_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=demo%40example.com"))
        .and(body_string_contains("password=hunter2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "bearer-abc",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;

    let token = client_for(&server)
        .request_token("demo@example.com", "hunter2")
        .await
        .unwrap();
    assert_eq!(token, "bearer-abc");
}

#[tokio::test]
async fn rejected_credentials_surface_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .request_token("nobody", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status(status) if status.as_u16() == 400));
}

#[tokio::test]
async fn current_user_sends_the_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer bearer-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "username": "demo_user",
            "email": "demo@example.com",
            "fullName": "Demo User",
            "avatar": "",
            "bio": "",
            "followers": 2,
            "following": 2,
            "posts": 1,
            "followingList": ["2", "3"],
            "followersList": ["2", "3"]
        })))
        .mount(&server)
        .await;

    let user = client_for(&server)
        .fetch_current_user("bearer-abc")
        .await
        .unwrap();
    assert_eq!(user.username, "demo_user");
    assert_eq!(user.following_list, vec!["2", "3"]);
}

#[tokio::test]
async fn posts_are_fetched_with_the_user_id_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("userId", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([post_body("p1"), post_body("p2")])),
        )
        .mount(&server)
        .await;

    let posts = client_for(&server).fetch_posts("1").await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "p1");
    assert!(posts[0].is_liked_by("2"));
    assert!(posts[0].location.is_none());
}

#[tokio::test]
async fn stories_are_fetched_with_the_user_id_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stories"))
        .and(query_param("userId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([story_body("s1")])))
        .mount(&server)
        .await;

    let stories = client_for(&server).fetch_stories("1").await.unwrap();
    assert_eq!(stories.len(), 1);
    assert!(stories[0].is_viewed_by("2"));
}

#[tokio::test]
async fn like_posts_the_user_id_and_decodes_the_updated_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts/p1/like"))
        .and(body_json(json!({"userId": "9"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_body("p1")))
        .mount(&server)
        .await;

    let post = client_for(&server).like_post("p1", "9").await.unwrap();
    assert_eq!(post.likes, 1);
}

#[tokio::test]
async fn comment_posts_the_author_snapshot_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts/p1/comment"))
        .and(body_json(json!({
            "userId": "9",
            "username": "alice",
            "userAvatar": "",
            "content": "nice shot"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_body("p1")))
        .mount(&server)
        .await;

    let request = CommentRequest {
        user_id: "9".into(),
        username: "alice".into(),
        user_avatar: String::new(),
        content: "nice shot".into(),
    };
    let post = client_for(&server)
        .comment_post("p1", &request)
        .await
        .unwrap();
    assert_eq!(post.id, "p1");
}

#[tokio::test]
async fn story_view_posts_the_viewer_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/stories/s1/view"))
        .and(body_json(json!({"userId": "9"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(story_body("s1")))
        .mount(&server)
        .await;

    let story = client_for(&server).view_story("s1", "9").await.unwrap();
    assert_eq!(story.id, "s1");
}

#[tokio::test]
async fn register_sends_the_snake_case_schema() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "username": "alice",
            "email": "a@x.com",
            "full_name": "Alice",
            "avatar": "",
            "bio": "",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "username": "alice",
            "email": "a@x.com",
            "full_name": "Alice",
            "avatar": "",
            "bio": "",
            "followers_count": 0,
            "following_count": 0
        })))
        .mount(&server)
        .await;

    let summary = client_for(&server)
        .register_user(&api_client::RegisterRequest {
            username: "alice".into(),
            email: "a@x.com".into(),
            full_name: "Alice".into(),
            avatar: String::new(),
            bio: String::new(),
            password: "hunter2".into(),
        })
        .await
        .unwrap();
    assert_eq!(summary.id, "42");
    assert_eq!(summary.followers_count, 0);
}

#[tokio::test]
async fn list_users_decodes_the_summary_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "1",
                "username": "demo_user",
                "email": "demo@example.com",
                "full_name": "Demo User",
                "avatar": null,
                "bio": null,
                "followers_count": 2,
                "following_count": 2
            }
        ])))
        .mount(&server)
        .await;

    let users = client_for(&server).list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].avatar.is_none());
    assert_eq!(users[0].followers_count, 2);
}
