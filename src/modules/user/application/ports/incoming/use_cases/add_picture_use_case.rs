use async_trait::async_trait;

use crate::user::application::domain::entities::{PictureKind, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddPictureError {
    #[error("Picture URL cannot be empty")]
    EmptyUrl,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddPictureUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        kind: PictureKind,
        url: &str,
    ) -> Result<(), AddPictureError>;
}
