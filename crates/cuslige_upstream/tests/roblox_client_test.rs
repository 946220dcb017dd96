//! Tests for the game platform client against a mock server.

use cuslige_core::UserId;
use cuslige_error::ProfileErrorKind;
use cuslige_interface::ProfileSource;
use cuslige_rate_limit::RetryPolicy;
use cuslige_upstream::{RobloxClient, UpstreamConfig};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> RobloxClient {
    RobloxClient::new(
        UpstreamConfig::single_host(server.uri()),
        RetryPolicy::new(3, Duration::from_millis(10)),
    )
    .unwrap()
}

async fn mount_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/users/156"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "builderman",
            "displayName": "Builderman",
            "description": "Builder of things",
            "created": "2006-02-27T21:06:40.3Z",
            "id": 156,
            "isBanned": false
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users/156/friends/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_resolve_username_posts_lookup_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/usernames/users"))
        .and(body_json(json!({"usernames": ["builderman"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"requestedUsername": "builderman", "id": 156, "name": "builderman"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = client(&server).resolve_username("builderman").await.unwrap();
    assert_eq!(id, UserId::new(156));
}

#[tokio::test]
async fn test_resolve_username_empty_data_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/usernames/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let err = client(&server).resolve_username("nobody").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_resolve_username_error_status_is_not_found_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/usernames/users"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).resolve_username("builderman").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_resolve_username_malformed_body_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/usernames/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
        .mount(&server)
        .await;

    let err = client(&server).resolve_username("builderman").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_fetch_profile_assembles_record() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/users/avatar-headshot"))
        .and(query_param("userIds", "156"))
        .and(query_param("size", "420x420"))
        .and(query_param("format", "Png"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"targetId": 156, "state": "Completed", "imageUrl": "https://tr.rbxcdn.com/156.png"}]
        })))
        .mount(&server)
        .await;

    let record = client(&server).fetch_profile(UserId::new(156)).await.unwrap();

    assert_eq!(record.name(), "builderman");
    assert_eq!(record.display_name(), "Builderman");
    assert_eq!(*record.user_id(), UserId::new(156));
    assert_eq!(record.description().as_deref(), Some("Builder of things"));
    assert_eq!(record.join_date(), Some("2006-02-27"));
    assert_eq!(*record.friend_count(), 3);
    assert_eq!(record.avatar_url(), "https://tr.rbxcdn.com/156.png");
}

#[tokio::test]
async fn test_empty_thumbnail_array_is_malformed() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/users/avatar-headshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let err = client(&server).fetch_profile(UserId::new(156)).await.unwrap_err();
    assert!(matches!(err.kind(), ProfileErrorKind::MalformedResponse { .. }));
    assert!(err.kind().is_upstream_failure());
}

#[tokio::test]
async fn test_identity_of_wrong_shape_is_malformed_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/156"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"displayName": "Builderman", "id": 156})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/users/156/friends/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/users/avatar-headshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"targetId": 156, "state": "Completed", "imageUrl": "https://tr.rbxcdn.com/156.png"}]
        })))
        .mount(&server)
        .await;

    let err = client(&server).fetch_profile(UserId::new(156)).await.unwrap_err();
    match err.kind() {
        ProfileErrorKind::MalformedResponse { endpoint, .. } => assert_eq!(endpoint, "identity"),
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn test_sub_call_retries_three_times_then_fails_whole_fetch() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/users/avatar-headshot"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let err = client(&server).fetch_profile(UserId::new(156)).await.unwrap_err();
    match err.kind() {
        ProfileErrorKind::UpstreamUnavailable { endpoint, .. } => assert_eq!(endpoint, "avatar"),
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn test_transient_failure_recovers_within_retries() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/users/avatar-headshot"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/users/avatar-headshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"imageUrl": "https://tr.rbxcdn.com/156.png"}]
        })))
        .mount(&server)
        .await;

    let record = client(&server).fetch_profile(UserId::new(156)).await.unwrap();
    assert_eq!(record.avatar_url(), "https://tr.rbxcdn.com/156.png");
}

#[tokio::test]
async fn test_premium_accepts_bare_and_object_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/1/validate-membership"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/users/2/validate-membership"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"isPremium": true})))
        .mount(&server)
        .await;

    let client = client(&server);
    assert!(client.fetch_premium(UserId::new(1)).await);
    assert!(client.fetch_premium(UserId::new(2)).await);
}

#[tokio::test]
async fn test_premium_failure_defaults_to_standard_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/156/validate-membership"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    assert!(!client(&server).fetch_premium(UserId::new(156)).await);
}
