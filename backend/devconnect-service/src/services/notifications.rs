//! Redis-backed notification store
//!
//! Each user has one list of like-notifications, newest first, kept at a
//! capped length.

use crate::error::Result;
use crate::models::NotificationRecord;
use redis::{aio::ConnectionManager, AsyncCommands};

/// Per-user notification lists (capped Redis lists)
#[derive(Clone)]
pub struct NotificationStore {
    redis: ConnectionManager,
    max_per_user: usize,
}

impl NotificationStore {
    pub fn new(redis: ConnectionManager, max_per_user: usize) -> Self {
        Self {
            redis,
            max_per_user,
        }
    }

    fn key(user_id: &str) -> String {
        format!("notifications:{}", user_id)
    }

    /// Push a notification to the front of the recipient's list, trimming
    /// the list to its cap
    pub async fn push(&self, recipient_id: &str, record: &NotificationRecord) -> Result<()> {
        let key = Self::key(recipient_id);
        let payload = serde_json::to_string(record)?;

        self.redis.clone().lpush::<_, _, ()>(&key, payload).await?;
        let max_index = (self.max_per_user.saturating_sub(1)) as isize;
        self.redis.clone().ltrim::<_, ()>(&key, 0, max_index).await?;

        Ok(())
    }

    /// Fetch the full list for a user, most recently pushed first.
    /// Entries that fail to deserialize are skipped.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<NotificationRecord>> {
        let key = Self::key(user_id);
        let raw: Vec<String> = self.redis.clone().lrange(&key, 0, -1).await?;

        let mut records = Vec::with_capacity(raw.len());
        for entry in raw {
            match serde_json::from_str::<NotificationRecord>(&entry) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(user_id = %user_id, error = %err, "Skipping malformed notification entry");
                }
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_key_format() {
        assert_eq!(
            NotificationStore::key("user_abc"),
            "notifications:user_abc"
        );
    }

    #[test]
    fn test_record_timestamp_is_millis() {
        let record = NotificationRecord::like(Uuid::new_v4(), "u".into(), "U".into());
        // Epoch millis for any recent date is far beyond the seconds range
        assert!(record.timestamp > 1_000_000_000_000);
    }
}
