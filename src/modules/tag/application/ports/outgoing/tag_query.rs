use async_trait::async_trait;

use crate::tag::application::domain::entities::Tag;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TagQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TagQuery: Send + Sync {
    /// Exact match on normalized text.
    async fn find_by_text(&self, text: &str) -> Result<Option<Tag>, TagQueryError>;
}
