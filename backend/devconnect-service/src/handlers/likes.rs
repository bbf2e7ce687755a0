/// Like toggle handler
use crate::error::Result;
use crate::models::ToggleLikeRequest;
use crate::services::{LikeService, NotificationStore};
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Toggle the caller's like on a post
///
/// POST /api/v1/posts/{post_id}/like
pub async fn toggle_like(
    pool: web::Data<PgPool>,
    notifications: web::Data<NotificationStore>,
    post_id: web::Path<Uuid>,
    req: web::Json<ToggleLikeRequest>,
) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone(), (**notifications).clone());
    let outcome = service
        .toggle(*post_id, &req.user_id, &req.user_name)
        .await?;

    Ok(HttpResponse::Ok().json(outcome))
}
