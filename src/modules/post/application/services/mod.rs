mod create_post_service;
mod get_post_service;
mod like_post_service;
mod list_posts_service;
mod post_loader;
mod soft_delete_post_service;

pub use create_post_service::CreatePostService;
pub use get_post_service::GetPostService;
pub use like_post_service::{LikePostService, ListLikersService};
pub use list_posts_service::ListPostsService;
pub use post_loader::{load_post_views, load_posts_response, LoadPostsError};
pub use soft_delete_post_service::SoftDeletePostService;
