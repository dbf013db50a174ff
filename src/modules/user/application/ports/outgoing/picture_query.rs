use async_trait::async_trait;

use crate::user::application::domain::entities::{PictureKind, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PictureQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PictureQuery: Send + Sync {
    /// URL of the most recently updated picture of `kind`, if any.
    async fn latest_url(
        &self,
        user: UserId,
        kind: PictureKind,
    ) -> Result<Option<String>, PictureQueryError>;
}
