/// Comment service - append-only comments on posts
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a comment to a post
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        user_id: &str,
        user_name: &str,
        content: &str,
    ) -> Result<Comment> {
        if user_id.trim().is_empty() || user_name.trim().is_empty() || content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "user_id, user_name and content are required".to_string(),
            ));
        }

        if post_repo::find_post_by_id(&self.pool, post_id).await?.is_none() {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        let comment =
            comment_repo::create_comment(&self.pool, post_id, user_id, user_name, content).await?;

        Ok(comment)
    }

    /// Comments for a post, oldest first
    pub async fn get_post_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        let comments = comment_repo::get_comments_by_post(&self.pool, post_id).await?;
        Ok(comments)
    }
}
