//! Tests for the shared blob cache client against a mock server.

use cuslige_core::{SharedBlob, UserId, UserRecord};
use cuslige_interface::SharedProfileStore;
use cuslige_upstream::{JsonHostClient, SharedCacheConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> JsonHostClient {
    JsonHostClient::new(&SharedCacheConfig::new(server.uri(), "mason"), "secret-token").unwrap()
}

fn roblox() -> UserRecord {
    UserRecord::builder()
        .name("roblox")
        .display_name("Roblox")
        .user_id(UserId::new(1))
        .friend_count(0u64)
        .avatar_url("https://tr.rbxcdn.com/1.png")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_fetch_all_sends_token_and_decodes_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/json/mason"))
        .and(header("authorization", "secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "1": {
                "name": "roblox",
                "displayName": "Roblox",
                "userId": 1,
                "description": null,
                "created": null,
                "friendCount": 0,
                "avatarUrl": "https://tr.rbxcdn.com/1.png"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let blob = client(&server).fetch_all().await.unwrap();
    assert_eq!(blob.record(UserId::new(1)), Some(roblox()));
}

#[tokio::test]
async fn test_fetch_all_non_200_is_cache_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/json/mason"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).fetch_all().await.unwrap_err();
    assert!(err.kind().is_cache_failure());
}

#[tokio::test]
async fn test_fetch_all_rejects_non_object_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/json/mason"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "a", "map"])))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.fetch_all().await.unwrap_err();
    assert!(err.kind().is_cache_failure());
    let message = err.to_string();
    assert!(message.contains(client.url()), "{}", message);
    assert!(message.contains("expected an object"), "{}", message);
}

#[tokio::test]
async fn test_replace_all_puts_whole_document() {
    let server = MockServer::start().await;
    let mut blob = SharedBlob::new();
    blob.insert_record(&roblox());

    Mock::given(method("PUT"))
        .and(path("/api/json/mason"))
        .and(header("authorization", "secret-token"))
        .and(body_json(blob.as_value()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).replace_all(&blob).await.unwrap();
}

#[tokio::test]
async fn test_replace_all_failure_is_reported_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/json/mason"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).replace_all(&SharedBlob::new()).await.unwrap_err();
    assert!(err.kind().is_cache_failure());
}

#[test]
fn test_debug_output_redacts_token() {
    let client = JsonHostClient::new(&SharedCacheConfig::default(), "secret-token").unwrap();
    let rendered = format!("{:?}", client);
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("https://jsonhost.com/api/json/mason"));
}
