/// Waitlist handler
use crate::db::waitlist_repo;
use crate::error::{AppError, Result};
use crate::models::JoinWaitlistRequest;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// Join the waitlist. Email is stored lowercased and joining twice is
/// idempotent.
///
/// POST /api/v1/waitlist
pub async fn join_waitlist(
    pool: web::Data<PgPool>,
    req: web::Json<JoinWaitlistRequest>,
) -> Result<HttpResponse> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() {
        return Err(AppError::BadRequest(
            "name and email are required".to_string(),
        ));
    }

    let email = req.email.trim().to_lowercase();
    waitlist_repo::upsert_entry(&pool, &email, req.name.trim()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "You have been added to the waitlist."
    })))
}
