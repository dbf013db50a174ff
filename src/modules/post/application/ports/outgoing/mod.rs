mod post_query;
mod post_repository;

pub use post_query::{PostQuery, PostQueryError};
pub use post_repository::{NewPostData, PostRepository, PostRepositoryError};
