/// Data models for devconnect-service
///
/// This module defines structures for:
/// - Post: project showcase posts
/// - Comment: comments on posts (append-only)
/// - NotificationRecord: like-notifications stored in Redis lists
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A project showcase post.
///
/// The liker set lives in the `post_likes` table; `like_count` is kept in
/// step with its cardinality inside the toggle transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    /// Author identity from the external identity provider (opaque string)
    pub author_id: String,
    pub author_name: String,
    pub title: String,
    pub description: String,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub flair: Option<String>,
    pub skills: Vec<String>,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment on a post. Appended, never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Notification type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    /// User liked a post
    Like,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Like => "like",
        }
    }
}

/// Like-notification record, stored JSON-serialized in the recipient's
/// Redis list. The wire shape is fixed: camelCase keys and an epoch-millis
/// timestamp, so existing clients keep parsing it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub post_id: Uuid,
    pub liker_id: String,
    pub liker_name: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl NotificationRecord {
    pub fn like(post_id: Uuid, liker_id: String, liker_name: String) -> Self {
        Self {
            kind: NotificationType::Like,
            post_id,
            liker_id,
            liker_name,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// Outcome of a like toggle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Like,
    Unlike,
}

impl ToggleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleAction::Like => "like",
            ToggleAction::Unlike => "unlike",
        }
    }
}

/// Waitlist entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WaitlistEntry {
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

// ============================================
// Request / response DTOs
// ============================================

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub author_id: String,
    pub author_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub flair: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
}

impl UpdatePostRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.github_link.is_none()
            && self.live_link.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleLikeRequest {
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleLikeResponse {
    pub action: ToggleAction,
    pub like_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub user_id: String,
    pub user_name: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct AddCommentResponse {
    pub comment_id: Uuid,
}

/// Post plus its derived read-side state, as returned to clients
#[derive(Debug, Serialize)]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    /// Users currently liking the post
    pub liked_by: Vec<String>,
    /// Comments, oldest first
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    /// Filter to a single author
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NotificationsQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<NotificationRecord>,
}

#[derive(Debug, Deserialize)]
pub struct JoinWaitlistRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Donation amount in major currency units (e.g. dollars)
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct CreateCheckoutResponse {
    pub session_id: String,
    /// Hosted checkout page URL
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_record_wire_shape() {
        let post_id = Uuid::new_v4();
        let record = NotificationRecord {
            kind: NotificationType::Like,
            post_id,
            liker_id: "user_b".to_string(),
            liker_name: "Bea".to_string(),
            timestamp: 1_700_000_000_000,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "like");
        assert_eq!(value["postId"], post_id.to_string());
        assert_eq!(value["likerId"], "user_b");
        assert_eq!(value["likerName"], "Bea");
        assert_eq!(value["timestamp"], 1_700_000_000_000_i64);
    }

    #[test]
    fn test_notification_record_round_trip() {
        let record = NotificationRecord::like(Uuid::new_v4(), "u1".into(), "Una".into());
        let json = serde_json::to_string(&record).unwrap();
        let parsed: NotificationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_toggle_action_serialization() {
        assert_eq!(
            serde_json::to_string(&ToggleAction::Like).unwrap(),
            "\"like\""
        );
        assert_eq!(
            serde_json::to_string(&ToggleAction::Unlike).unwrap(),
            "\"unlike\""
        );
        assert_eq!(ToggleAction::Like.as_str(), "like");
        assert_eq!(ToggleAction::Unlike.as_str(), "unlike");
    }

    #[test]
    fn test_update_post_request_is_empty() {
        assert!(UpdatePostRequest::default().is_empty());
        let req = UpdatePostRequest {
            title: Some("New title".to_string()),
            ..Default::default()
        };
        assert!(!req.is_empty());
    }
}
