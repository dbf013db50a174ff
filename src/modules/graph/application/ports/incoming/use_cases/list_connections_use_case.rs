use async_trait::async_trait;

use crate::graph::application::domain::entities::Direction;
use crate::user::application::domain::entities::{UserId, UserSummary};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListConnectionsError {
    #[error("User not found")]
    UserNotFound,

    #[error("Failed to list connections: {0}")]
    QueryFailed(String),
}

/// `Outbound` lists who the user follows, `Inbound` lists their followers.
#[async_trait]
pub trait ListConnectionsUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        direction: Direction,
    ) -> Result<Vec<UserSummary>, ListConnectionsError>;
}
