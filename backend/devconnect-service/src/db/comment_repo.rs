use crate::models::Comment;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

/// Append a comment to a post
pub async fn create_comment(
    pool: &PgPool,
    post_id: Uuid,
    user_id: &str,
    user_name: &str,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (post_id, user_id, user_name, content)
        VALUES ($1, $2, $3, $4)
        RETURNING id, post_id, user_id, user_name, content, created_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(user_name)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Comments for a single post, oldest first (insertion order)
pub async fn get_comments_by_post(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, user_id, user_name, content, created_at
        FROM comments
        WHERE post_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Comments for a batch of posts, grouped by post id, oldest first
pub async fn comments_for_posts(
    pool: &PgPool,
    post_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<Comment>>, sqlx::Error> {
    if post_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, user_id, user_name, content, created_at
        FROM comments
        WHERE post_id = ANY($1)
        ORDER BY created_at ASC
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await?;

    let mut result: HashMap<Uuid, Vec<Comment>> = HashMap::new();
    for comment in comments {
        result.entry(comment.post_id).or_default().push(comment);
    }

    Ok(result)
}
