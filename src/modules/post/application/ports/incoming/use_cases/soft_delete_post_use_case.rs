use async_trait::async_trait;

use crate::post::application::domain::entities::PostId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SoftDeletePostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SoftDeletePostUseCase: Send + Sync {
    async fn execute(&self, id: PostId) -> Result<(), SoftDeletePostError>;
}
