use async_trait::async_trait;

use crate::post::application::{
    assembler::{PostView, PostsResponse},
    domain::entities::PostId,
};

pub const RECENT_POSTS_LIMIT: u64 = 50;
pub const AUTHOR_POSTS_LIMIT: u64 = 100;
pub const REPLIES_LIMIT: u64 = 50;
pub const MENTIONS_LIMIT: u64 = 50;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPostsError {
    #[error("User not found")]
    UserNotFound,

    #[error("Post not found")]
    PostNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListRecentPostsUseCase: Send + Sync {
    async fn execute(&self, limit: Option<u64>) -> Result<PostsResponse, ListPostsError>;
}

/// `author` is either a user id or a username.
#[async_trait]
pub trait ListPostsByAuthorUseCase: Send + Sync {
    async fn execute(&self, author: &str) -> Result<Vec<PostView>, ListPostsError>;
}

#[async_trait]
pub trait ListRepliesUseCase: Send + Sync {
    async fn execute(
        &self,
        parent: PostId,
        limit: Option<u64>,
    ) -> Result<Vec<PostView>, ListPostsError>;
}

#[async_trait]
pub trait ListMentionsUseCase: Send + Sync {
    async fn execute(
        &self,
        username: &str,
        limit: Option<u64>,
    ) -> Result<Vec<PostView>, ListPostsError>;
}
