use async_trait::async_trait;
use tracing::{error, info};

use crate::post::application::{
    domain::entities::PostId,
    ports::{
        incoming::use_cases::{SoftDeletePostError, SoftDeletePostUseCase},
        outgoing::{PostRepository, PostRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct SoftDeletePostService<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
}

impl<R> SoftDeletePostService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SoftDeletePostUseCase for SoftDeletePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, id: PostId) -> Result<(), SoftDeletePostError> {
        match self.repository.soft_delete_post(id).await {
            Ok(()) => {
                info!(post_id = %id, "post soft-deleted");
                Ok(())
            }
            Err(PostRepositoryError::PostNotFound) => Err(SoftDeletePostError::PostNotFound),
            Err(e) => {
                error!(post_id = %id, "failed to delete post: {}", e);
                Err(SoftDeletePostError::RepositoryError(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::application::domain::entities::PostRecord;
    use crate::post::application::ports::outgoing::NewPostData;
    use crate::user::application::domain::entities::UserId;
    use mockall::{mock, predicate::*};

    mock! {
        pub PostRepo {}
        #[async_trait]
        impl PostRepository for PostRepo {
            async fn create_post(&self, data: NewPostData) -> Result<PostRecord, PostRepositoryError>;
            async fn like_post(&self, post: PostId, user: UserId) -> Result<(), PostRepositoryError>;
            async fn soft_delete_post(&self, id: PostId) -> Result<(), PostRepositoryError>;
        }
    }

    #[tokio::test]
    async fn deletes_active_post() {
        let id = PostId::new();
        let mut repo = MockPostRepo::new();
        repo.expect_soft_delete_post()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        let result = SoftDeletePostService::new(repo).execute(id).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let mut repo = MockPostRepo::new();
        repo.expect_soft_delete_post()
            .returning(|_| Err(PostRepositoryError::PostNotFound));

        let result = SoftDeletePostService::new(repo).execute(PostId::new()).await;

        assert!(matches!(result, Err(SoftDeletePostError::PostNotFound)));
    }

    #[tokio::test]
    async fn database_error_is_reported() {
        let mut repo = MockPostRepo::new();
        repo.expect_soft_delete_post()
            .returning(|_| Err(PostRepositoryError::DatabaseError("lock timeout".into())));

        let result = SoftDeletePostService::new(repo).execute(PostId::new()).await;

        assert!(matches!(
            result,
            Err(SoftDeletePostError::RepositoryError(_))
        ));
    }
}
