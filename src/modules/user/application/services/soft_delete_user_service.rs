use async_trait::async_trait;
use tracing::{error, info};

use crate::user::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{SoftDeleteUserError, SoftDeleteUserUseCase},
        outgoing::{UserRepository, UserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct SoftDeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> SoftDeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SoftDeleteUserUseCase for SoftDeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, id: UserId) -> Result<(), SoftDeleteUserError> {
        match self.repository.soft_delete_user(id).await {
            Ok(()) => {
                info!(user_id = %id, "user soft-deleted");
                Ok(())
            }
            Err(UserRepositoryError::UserNotFound) => Err(SoftDeleteUserError::UserNotFound),
            Err(e) => {
                error!(user_id = %id, "failed to delete user: {}", e);
                Err(SoftDeleteUserError::RepositoryError(e.to_string()))
            }
        }
    }
}
