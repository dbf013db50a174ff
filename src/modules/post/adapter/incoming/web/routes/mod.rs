mod create_post;
mod get_post;
mod like_post;
mod limit_query;
mod list_posts;
mod soft_delete_post;

pub use create_post::*;
pub use get_post::*;
pub use like_post::*;
pub use limit_query::*;
pub use list_posts::*;
pub use soft_delete_post::*;
