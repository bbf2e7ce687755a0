//! Like toggle service
//!
//! Flips a user's membership in a post's liker set and adjusts the counter
//! in the same transaction, so `posts.like_count` always matches the
//! cardinality of `post_likes` for that post. Concurrent toggles on the
//! same post serialize on the row lock taken by the initial SELECT.

use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::{NotificationRecord, ToggleAction, ToggleLikeResponse};
use crate::services::NotificationStore;
use sqlx::PgPool;
use uuid::Uuid;

pub struct LikeService {
    pool: PgPool,
    notifications: NotificationStore,
}

impl LikeService {
    pub fn new(pool: PgPool, notifications: NotificationStore) -> Self {
        Self {
            pool,
            notifications,
        }
    }

    /// Toggle `user_id`'s like on `post_id`.
    ///
    /// A transition into "liked" by someone other than the author pushes a
    /// notification to the author's list. The notification write happens
    /// after commit; if it fails the like still stands and the failure is
    /// only logged.
    pub async fn toggle(
        &self,
        post_id: Uuid,
        user_id: &str,
        user_name: &str,
    ) -> Result<ToggleLikeResponse> {
        if user_id.trim().is_empty() {
            return Err(AppError::BadRequest("user_id is required".to_string()));
        }

        let mut tx = self.pool.begin().await?;

        // Row lock serializes concurrent toggles on the same post
        let author_id: Option<String> =
            sqlx::query_scalar("SELECT author_id FROM posts WHERE id = $1 FOR UPDATE")
                .bind(post_id)
                .fetch_optional(&mut *tx)
                .await?;

        let author_id = match author_id {
            Some(author_id) => author_id,
            None => return Err(AppError::NotFound("Post not found".to_string())),
        };

        let removed = sqlx::query(
            r#"
            DELETE FROM post_likes
            WHERE post_id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let (action, like_count) = if removed > 0 {
            let like_count: i64 = sqlx::query_scalar(
                r#"
                UPDATE posts
                SET like_count = GREATEST(like_count - 1, 0), updated_at = NOW()
                WHERE id = $1
                RETURNING like_count
                "#,
            )
            .bind(post_id)
            .fetch_one(&mut *tx)
            .await?;

            (ToggleAction::Unlike, like_count)
        } else {
            sqlx::query(
                r#"
                INSERT INTO post_likes (post_id, user_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(post_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

            let like_count: i64 = sqlx::query_scalar(
                r#"
                UPDATE posts
                SET like_count = like_count + 1, updated_at = NOW()
                WHERE id = $1
                RETURNING like_count
                "#,
            )
            .bind(post_id)
            .fetch_one(&mut *tx)
            .await?;

            (ToggleAction::Like, like_count)
        };

        tx.commit().await?;
        metrics::LIKE_TOGGLE_TOTAL
            .with_label_values(&[action.as_str()])
            .inc();

        if should_notify(action, &author_id, user_id) {
            let record =
                NotificationRecord::like(post_id, user_id.to_string(), user_name.to_string());
            match self.notifications.push(&author_id, &record).await {
                Ok(()) => {
                    metrics::NOTIFICATION_PUSH_TOTAL
                        .with_label_values(&["ok"])
                        .inc();
                }
                Err(err) => {
                    // The like itself committed; surface the miss in logs only
                    metrics::NOTIFICATION_PUSH_TOTAL
                        .with_label_values(&["error"])
                        .inc();
                    tracing::warn!(
                        post_id = %post_id,
                        recipient = %author_id,
                        error = %err,
                        "Failed to push like notification"
                    );
                }
            }
        }

        Ok(ToggleLikeResponse { action, like_count })
    }
}

/// A notification goes out only on a transition into "liked", and never for
/// the author liking their own post. Unlike never notifies.
fn should_notify(action: ToggleAction, author_id: &str, liker_id: &str) -> bool {
    action == ToggleAction::Like && author_id != liker_id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_by_non_author_notifies() {
        assert!(should_notify(ToggleAction::Like, "author", "liker"));
    }

    #[test]
    fn test_self_like_never_notifies() {
        assert!(!should_notify(ToggleAction::Like, "author", "author"));
    }

    #[test]
    fn test_unlike_never_notifies() {
        assert!(!should_notify(ToggleAction::Unlike, "author", "liker"));
        assert!(!should_notify(ToggleAction::Unlike, "author", "author"));
    }
}
