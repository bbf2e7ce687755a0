/// Notification read handler
use crate::error::{AppError, Result};
use crate::models::{NotificationsQuery, NotificationsResponse};
use crate::services::NotificationStore;
use actix_web::{web, HttpResponse};

/// Full notification list for a user, most recently pushed first
///
/// GET /api/v1/notifications?user_id=...
pub async fn list_notifications(
    store: web::Data<NotificationStore>,
    query: web::Query<NotificationsQuery>,
) -> Result<HttpResponse> {
    let user_id = match query.user_id.as_deref() {
        Some(user_id) if !user_id.trim().is_empty() => user_id,
        _ => return Err(AppError::BadRequest("user_id is required".to_string())),
    };

    let notifications = store.list_for_user(user_id).await?;

    Ok(HttpResponse::Ok().json(NotificationsResponse { notifications }))
}
