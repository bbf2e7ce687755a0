/// Business logic layer
pub mod comments;
pub mod donations;
pub mod likes;
pub mod notifications;
pub mod posts;

pub use comments::CommentService;
pub use donations::{CheckoutSession, StripeClient};
pub use likes::LikeService;
pub use notifications::NotificationStore;
pub use posts::PostService;
