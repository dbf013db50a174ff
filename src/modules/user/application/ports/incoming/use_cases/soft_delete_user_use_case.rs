use async_trait::async_trait;

use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SoftDeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SoftDeleteUserUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<(), SoftDeleteUserError>;
}
