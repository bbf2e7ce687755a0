/// HTTP request handlers
pub mod comments;
pub mod donations;
pub mod likes;
pub mod notifications;
pub mod posts;
pub mod waitlist;

use actix_web::web;

pub use comments::{add_comment, get_comments};
pub use donations::{create_checkout, get_checkout};
pub use likes::toggle_like;
pub use notifications::list_notifications;
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
pub use waitlist::join_waitlist;

/// Register API routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/posts")
                    .service(
                        web::resource("")
                            .route(web::post().to(create_post))
                            .route(web::get().to(list_posts)),
                    )
                    .service(
                        web::resource("/{post_id}")
                            .route(web::get().to(get_post))
                            .route(web::patch().to(update_post))
                            .route(web::delete().to(delete_post)),
                    )
                    .route("/{post_id}/like", web::post().to(toggle_like))
                    .service(
                        web::resource("/{post_id}/comments")
                            .route(web::post().to(add_comment))
                            .route(web::get().to(get_comments)),
                    ),
            )
            .route("/notifications", web::get().to(list_notifications))
            .service(
                web::scope("/donations")
                    .route("/checkout", web::post().to(create_checkout))
                    .route("/checkout/{session_id}", web::get().to(get_checkout)),
            )
            .route("/waitlist", web::post().to(join_waitlist)),
    );
}
