/// Comment handlers
use crate::error::Result;
use crate::models::{AddCommentRequest, AddCommentResponse};
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Append a comment to a post
///
/// POST /api/v1/posts/{post_id}/comments
pub async fn add_comment(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    req: web::Json<AddCommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service
        .add_comment(*post_id, &req.user_id, &req.user_name, &req.content)
        .await?;

    Ok(HttpResponse::Created().json(AddCommentResponse {
        comment_id: comment.id,
    }))
}

/// List comments on a post, oldest first
///
/// GET /api/v1/posts/{post_id}/comments
pub async fn get_comments(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comments = service.get_post_comments(*post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}
