use async_trait::async_trait;

use crate::user::application::domain::entities::{User, UserId, UserSummary};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the user store. Every lookup sees active users only.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserQueryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;

    /// Batched lookup. Unknown or deleted ids are silently absent from the result.
    async fn find_summaries(&self, ids: &[UserId]) -> Result<Vec<UserSummary>, UserQueryError>;
}
