use async_trait::async_trait;
use tracing::error;

use crate::user::application::{
    domain::entities::{validate_username, User, UserId},
    ports::{
        incoming::use_cases::{GetUserByUsernameUseCase, GetUserError, GetUserUseCase},
        outgoing::UserQuery,
    },
};

/// Serves both id and username lookups. Deleted users are never returned,
/// and a malformed username is indistinguishable from an unknown one.
#[derive(Debug, Clone)]
pub struct GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, id: UserId) -> Result<User, GetUserError> {
        self.query
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!(user_id = %id, "failed to fetch user: {}", e);
                GetUserError::QueryFailed(e.to_string())
            })?
            .ok_or(GetUserError::UserNotFound)
    }
}

#[async_trait]
impl<Q> GetUserByUsernameUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<User, GetUserError> {
        let username = validate_username(username).map_err(|_| GetUserError::UserNotFound)?;

        self.query
            .find_by_username(&username)
            .await
            .map_err(|e| {
                error!(username = %username, "failed to fetch user: {}", e);
                GetUserError::QueryFailed(e.to_string())
            })?
            .ok_or(GetUserError::UserNotFound)
    }
}
