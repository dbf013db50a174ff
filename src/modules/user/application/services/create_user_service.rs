use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::user::application::{
    domain::entities::UserRef,
    ports::{
        incoming::use_cases::{CreateUserCommand, CreateUserError, CreateUserUseCase},
        outgoing::{CreateUserData, UserRepository, UserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateUserUseCase for CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<UserRef, CreateUserError> {
        let data = CreateUserData {
            username: command.username().to_string(),
            display_name: command.display_name().to_string(),
            biography: command.biography().to_string(),
            verified: command.verified(),
        };

        match self.repository.create_user(data).await {
            Ok(user) => {
                info!(user_id = %user.id, username = %user.username, "user created");
                Ok(user)
            }
            Err(UserRepositoryError::UsernameAlreadyExists) => {
                warn!(username = %command.username(), "username already taken");
                Err(CreateUserError::UsernameTaken)
            }
            Err(e) => {
                error!(username = %command.username(), "failed to create user: {}", e);
                Err(CreateUserError::RepositoryError(e.to_string()))
            }
        }
    }
}
