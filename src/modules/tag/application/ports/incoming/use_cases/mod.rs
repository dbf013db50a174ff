mod get_tag_use_case;
mod list_posts_by_tag_use_case;

pub use get_tag_use_case::{GetTagError, GetTagUseCase};
pub use list_posts_by_tag_use_case::{ListPostsByTagError, ListPostsByTagUseCase, TAG_POSTS_LIMIT};
