/// DevConnect Service Library
///
/// Backend for the DevConnect project-showcase platform: project posts,
/// like toggles, comments, like-notifications, donations, and the waitlist.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: Data structures for posts, comments, notifications
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
