/// Post service - creation, reads with derived state, updates, deletion
use crate::db::{comment_repo, post_repo};
use crate::error::Result;
use crate::models::{CreatePostRequest, Post, PostView, UpdatePostRequest};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new post
    pub async fn create_post(&self, req: &CreatePostRequest) -> Result<Post> {
        let post = post_repo::create_post(&self.pool, req).await?;
        Ok(post)
    }

    /// Get a post by ID with its comments and liker set
    pub async fn get_post(&self, post_id: Uuid) -> Result<Option<PostView>> {
        let post = match post_repo::find_post_by_id(&self.pool, post_id).await? {
            Some(post) => post,
            None => return Ok(None),
        };

        let mut liked_by = post_repo::liked_by_for_posts(&self.pool, &[post_id]).await?;
        let comments = comment_repo::get_comments_by_post(&self.pool, post_id).await?;

        Ok(Some(PostView {
            post,
            liked_by: liked_by.remove(&post_id).unwrap_or_default(),
            comments,
        }))
    }

    /// List posts ordered by recency, optionally filtered to one author,
    /// each with its comments and liker set
    pub async fn list_posts(&self, author_id: Option<&str>) -> Result<Vec<PostView>> {
        let posts = post_repo::list_posts(&self.pool, author_id).await?;
        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();

        let mut liked_by = post_repo::liked_by_for_posts(&self.pool, &post_ids).await?;
        let mut comments = comment_repo::comments_for_posts(&self.pool, &post_ids).await?;

        let views = posts
            .into_iter()
            .map(|post| {
                let id = post.id;
                PostView {
                    post,
                    liked_by: liked_by.remove(&id).unwrap_or_default(),
                    comments: comments.remove(&id).unwrap_or_default(),
                }
            })
            .collect();

        Ok(views)
    }

    /// Update descriptive fields. Returns false when the post does not exist.
    pub async fn update_post(&self, post_id: Uuid, req: &UpdatePostRequest) -> Result<bool> {
        let updated = post_repo::update_post(&self.pool, post_id, req).await?;
        Ok(updated)
    }

    /// Hard delete a post with its likes and comments
    pub async fn delete_post(&self, post_id: Uuid) -> Result<bool> {
        let deleted = post_repo::delete_post(&self.pool, post_id).await?;
        Ok(deleted)
    }
}
