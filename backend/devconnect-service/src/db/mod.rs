/// Database access layer
///
/// Repository functions over `sqlx::PgPool`. Business rules live in
/// `services`; these functions only speak SQL.
pub mod comment_repo;
pub mod post_repo;
pub mod waitlist_repo;
