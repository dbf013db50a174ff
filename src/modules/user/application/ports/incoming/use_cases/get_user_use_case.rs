use async_trait::async_trait;

use crate::user::application::domain::entities::{User, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Failed to fetch user: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<User, GetUserError>;
}

#[async_trait]
pub trait GetUserByUsernameUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<User, GetUserError>;
}
