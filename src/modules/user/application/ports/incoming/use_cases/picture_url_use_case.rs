use async_trait::async_trait;

use crate::user::application::domain::entities::PictureKind;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PictureUrlError {
    #[error("User not found")]
    UserNotFound,

    #[error("Picture not found")]
    PictureNotFound,

    #[error("Failed to resolve picture: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait PictureUrlUseCase: Send + Sync {
    async fn execute(&self, username: &str, kind: PictureKind) -> Result<String, PictureUrlError>;
}
