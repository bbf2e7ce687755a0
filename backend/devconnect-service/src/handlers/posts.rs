/// Post handlers - HTTP endpoints for post CRUD
use crate::error::{AppError, Result};
use crate::models::{CreatePostRequest, ListPostsQuery, UpdatePostRequest};
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post
///
/// POST /api/v1/posts
pub async fn create_post(
    pool: web::Data<PgPool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    if req.title.trim().is_empty() || req.author_id.trim().is_empty() {
        return Err(AppError::BadRequest(
            "title and author_id are required".to_string(),
        ));
    }

    let service = PostService::new((**pool).clone());
    let post = service.create_post(&req).await?;

    Ok(HttpResponse::Created().json(post))
}

/// List posts, newest first, optionally filtered to a single author
///
/// GET /api/v1/posts[?user_id=...]
pub async fn list_posts(
    pool: web::Data<PgPool>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service.list_posts(query.user_id.as_deref()).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by ID with comments and liker set
///
/// GET /api/v1/posts/{post_id}
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    match service.get_post(*post_id).await? {
        Some(view) => Ok(HttpResponse::Ok().json(view)),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// Update a post's descriptive fields
///
/// PATCH /api/v1/posts/{post_id}
pub async fn update_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    if req.is_empty() {
        return Err(AppError::BadRequest("no fields to update".to_string()));
    }

    let service = PostService::new((**pool).clone());
    let updated = service.update_post(*post_id, &req).await?;

    if updated {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(AppError::NotFound("Post not found".to_string()))
    }
}

/// Delete a post
///
/// DELETE /api/v1/posts/{post_id}
pub async fn delete_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let deleted = service.delete_post(*post_id).await?;

    if deleted {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound("Post not found".to_string()))
    }
}
