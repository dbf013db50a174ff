use async_trait::async_trait;

use crate::post::application::{assembler::PostsResponse, domain::entities::PostId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Single post with its counts, tags and author.
#[async_trait]
pub trait GetPostUseCase: Send + Sync {
    async fn execute(&self, id: PostId) -> Result<PostsResponse, GetPostError>;
}
