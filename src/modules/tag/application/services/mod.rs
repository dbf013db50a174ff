mod get_tag_service;
mod list_posts_by_tag_service;

pub use get_tag_service::GetTagService;
pub use list_posts_by_tag_service::ListPostsByTagService;
