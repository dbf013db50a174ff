use async_trait::async_trait;

use crate::tag::application::domain::entities::Tag;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTagError {
    #[error("Tag not found")]
    TagNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// `text` is normalized before lookup, so `#Nature` finds `nature`.
#[async_trait]
pub trait GetTagUseCase: Send + Sync {
    async fn execute(&self, text: &str) -> Result<Tag, GetTagError>;
}
