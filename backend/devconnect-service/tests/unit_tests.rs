//! Unit tests for devconnect-service wire-visible shapes
//!
//! This test module covers:
//! - Notification record serialization (the Redis wire format)
//! - Request payload deserialization and defaults
//! - Post/comment response shapes

use chrono::Utc;
use devconnect_service::models::*;
use uuid::Uuid;

#[test]
fn test_notification_wire_keys_are_camel_case() {
    let record = NotificationRecord {
        kind: NotificationType::Like,
        post_id: Uuid::new_v4(),
        liker_id: "user_b".to_string(),
        liker_name: "Bea".to_string(),
        timestamp: Utc::now().timestamp_millis(),
    };

    let value = serde_json::to_value(&record).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    for key in ["type", "postId", "likerId", "likerName", "timestamp"] {
        assert!(keys.contains(&key), "missing wire key {key}");
    }
}

#[test]
fn test_notification_parses_stored_entry() {
    // Shape produced by earlier deployments of the platform
    let raw = r#"{
        "type": "like",
        "postId": "7f8a1f24-9f6b-4f2e-8f10-2b8f6f1e6a01",
        "likerId": "user_b",
        "likerName": "Bea",
        "timestamp": 1700000000000
    }"#;

    let record: NotificationRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.kind, NotificationType::Like);
    assert_eq!(record.liker_id, "user_b");
    assert_eq!(record.timestamp, 1_700_000_000_000);
}

#[test]
fn test_malformed_notification_entry_is_rejected() {
    // Missing likerId must not parse; the store skips such entries
    let raw = r#"{"type": "like", "postId": "7f8a1f24-9f6b-4f2e-8f10-2b8f6f1e6a01"}"#;
    assert!(serde_json::from_str::<NotificationRecord>(raw).is_err());
}

#[test]
fn test_create_post_request_defaults() {
    let raw = r#"{
        "author_id": "user_a",
        "author_name": "Ada",
        "title": "My project"
    }"#;

    let req: CreatePostRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(req.title, "My project");
    assert_eq!(req.description, "");
    assert!(req.skills.is_empty());
    assert!(req.github_link.is_none());
}

#[test]
fn test_toggle_like_request_user_name_optional() {
    let raw = r#"{"user_id": "user_b"}"#;
    let req: ToggleLikeRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(req.user_id, "user_b");
    assert_eq!(req.user_name, "");
}

#[test]
fn test_toggle_like_response_shape() {
    let resp = ToggleLikeResponse {
        action: ToggleAction::Like,
        like_count: 3,
    };
    let value = serde_json::to_value(&resp).unwrap();
    assert_eq!(value["action"], "like");
    assert_eq!(value["like_count"], 3);
}

#[test]
fn test_post_view_flattens_post_fields() {
    let post = Post {
        id: Uuid::new_v4(),
        author_id: "user_a".to_string(),
        author_name: "Ada".to_string(),
        title: "My project".to_string(),
        description: "A showcase".to_string(),
        github_link: Some("https://github.com/ada/project".to_string()),
        live_link: None,
        flair: Some("Web".to_string()),
        skills: vec!["rust".to_string(), "postgres".to_string()],
        like_count: 1,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    let post_id = post.id;

    let view = PostView {
        post,
        liked_by: vec!["user_b".to_string()],
        comments: vec![Comment {
            id: Uuid::new_v4(),
            post_id,
            user_id: "user_b".to_string(),
            user_name: "Bea".to_string(),
            content: "Nice!".to_string(),
            created_at: Utc::now(),
        }],
    };

    let value = serde_json::to_value(&view).unwrap();
    // Flattened post fields sit next to the derived state
    assert_eq!(value["title"], "My project");
    assert_eq!(value["like_count"], 1);
    assert_eq!(value["liked_by"][0], "user_b");
    assert_eq!(value["comments"][0]["content"], "Nice!");
}
