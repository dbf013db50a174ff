use async_trait::async_trait;

use crate::post::application::domain::entities::PostId;
use crate::user::application::domain::entities::{UserId, UserSummary};

pub const LIKERS_LIMIT: u64 = 50;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LikePostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LikePostUseCase: Send + Sync {
    async fn execute(&self, post: PostId, user: UserId) -> Result<(), LikePostError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListLikersError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListLikersUseCase: Send + Sync {
    async fn execute(
        &self,
        post: PostId,
        limit: Option<u64>,
    ) -> Result<Vec<UserSummary>, ListLikersError>;
}
