use async_trait::async_trait;
use tracing::error;

use crate::user::application::{
    domain::entities::{PictureKind, UserId},
    ports::{
        incoming::use_cases::{AddPictureError, AddPictureUseCase},
        outgoing::{NewPictureData, UserQuery, UserRepository, UserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct AddPictureService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    users: Q,
    repository: R,
}

impl<Q, R> AddPictureService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(users: Q, repository: R) -> Self {
        Self { users, repository }
    }
}

#[async_trait]
impl<Q, R> AddPictureUseCase for AddPictureService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        kind: PictureKind,
        url: &str,
    ) -> Result<(), AddPictureError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AddPictureError::EmptyUrl);
        }

        // Pictures may only be attached to active users; the foreign key
        // alone would accept deleted ones.
        let exists = self
            .users
            .find_by_id(user)
            .await
            .map_err(|e| AddPictureError::RepositoryError(e.to_string()))?
            .is_some();

        if !exists {
            return Err(AddPictureError::UserNotFound);
        }

        self.repository
            .add_picture(NewPictureData {
                user,
                kind,
                url: url.to_string(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => AddPictureError::UserNotFound,
                other => {
                    error!(user_id = %user, ?kind, "failed to add picture: {}", other);
                    AddPictureError::RepositoryError(other.to_string())
                }
            })
    }
}
