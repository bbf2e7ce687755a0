use crate::models::{CreatePostRequest, Post, UpdatePostRequest};
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use uuid::Uuid;

/// Create a new post with a server-assigned id
pub async fn create_post(pool: &PgPool, req: &CreatePostRequest) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (author_id, author_name, title, description, github_link, live_link, flair, skills)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, author_id, author_name, title, description, github_link, live_link,
                  flair, skills, like_count, created_at, updated_at
        "#,
    )
    .bind(&req.author_id)
    .bind(&req.author_name)
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.github_link)
    .bind(&req.live_link)
    .bind(&req.flair)
    .bind(&req.skills)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author_id, author_name, title, description, github_link, live_link,
               flair, skills, like_count, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// List posts ordered by recency, optionally filtered to one author
pub async fn list_posts(pool: &PgPool, author_id: Option<&str>) -> Result<Vec<Post>, sqlx::Error> {
    let posts = match author_id {
        Some(author) => {
            sqlx::query_as::<_, Post>(
                r#"
                SELECT id, author_id, author_name, title, description, github_link, live_link,
                       flair, skills, like_count, created_at, updated_at
                FROM posts
                WHERE author_id = $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(author)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Post>(
                r#"
                SELECT id, author_id, author_name, title, description, github_link, live_link,
                       flair, skills, like_count, created_at, updated_at
                FROM posts
                ORDER BY created_at DESC
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(posts)
}

/// Update descriptive fields on a post. Returns false when the post is gone.
pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    req: &UpdatePostRequest,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET title = COALESCE($1, title),
            description = COALESCE($2, description),
            github_link = COALESCE($3, github_link),
            live_link = COALESCE($4, live_link),
            updated_at = NOW()
        WHERE id = $5
        "#,
    )
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.github_link)
    .bind(&req.live_link)
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Hard delete a post. Likes and comments cascade via foreign keys.
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Liker sets for a batch of posts, keyed by post id
pub async fn liked_by_for_posts(
    pool: &PgPool,
    post_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<String>>, sqlx::Error> {
    if post_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query(
        r#"
        SELECT post_id, user_id
        FROM post_likes
        WHERE post_id = ANY($1)
        ORDER BY created_at ASC
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await?;

    let mut result: HashMap<Uuid, Vec<String>> = HashMap::new();
    for row in rows {
        let post_id: Uuid = row.get("post_id");
        let user_id: String = row.get("user_id");
        result.entry(post_id).or_default().push(user_id);
    }

    Ok(result)
}
