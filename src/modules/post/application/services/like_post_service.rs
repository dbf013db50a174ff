use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::post::application::{
    domain::entities::{cap_limit, PostId},
    ports::{
        incoming::use_cases::{
            LikePostError, LikePostUseCase, ListLikersError, ListLikersUseCase, LIKERS_LIMIT,
        },
        outgoing::{PostQuery, PostRepository, PostRepositoryError},
    },
};
use crate::user::application::domain::entities::{UserId, UserSummary};

#[derive(Debug, Clone)]
pub struct LikePostService<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
}

impl<R> LikePostService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> LikePostUseCase for LikePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, post: PostId, user: UserId) -> Result<(), LikePostError> {
        match self.repository.like_post(post, user).await {
            Ok(()) => {
                info!(post_id = %post, user_id = %user, "post liked");
                Ok(())
            }
            Err(PostRepositoryError::AlreadyLiked) => {
                warn!(post_id = %post, user_id = %user, "duplicate like rejected");
                Err(LikePostError::AlreadyLiked)
            }
            Err(PostRepositoryError::PostNotFound) => Err(LikePostError::PostNotFound),
            Err(PostRepositoryError::UserNotFound) => Err(LikePostError::UserNotFound),
            Err(e) => {
                error!(post_id = %post, user_id = %user, "failed to like post: {}", e);
                Err(LikePostError::RepositoryError(e.to_string()))
            }
        }
    }
}

/// An unknown or deleted post simply has no likers.
#[derive(Debug, Clone)]
pub struct ListLikersService<Q>
where
    Q: PostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListLikersService<Q>
where
    Q: PostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListLikersUseCase for ListLikersService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        post: PostId,
        limit: Option<u64>,
    ) -> Result<Vec<UserSummary>, ListLikersError> {
        self.query
            .list_likers(post, cap_limit(limit, LIKERS_LIMIT))
            .await
            .map_err(|e| {
                error!(post_id = %post, "failed to list likers: {}", e);
                ListLikersError::QueryFailed(e.to_string())
            })
    }
}
