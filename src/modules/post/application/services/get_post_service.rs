use async_trait::async_trait;
use tracing::error;

use crate::post::application::{
    assembler::PostsResponse,
    domain::entities::PostId,
    ports::{
        incoming::use_cases::{GetPostError, GetPostUseCase},
        outgoing::PostQuery,
    },
    services::load_posts_response,
};
use crate::user::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone)]
pub struct GetPostService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    posts: Q,
    users: U,
}

impl<Q, U> GetPostService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(posts: Q, users: U) -> Self {
        Self { posts, users }
    }
}

#[async_trait]
impl<Q, U> GetPostUseCase for GetPostService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, id: PostId) -> Result<PostsResponse, GetPostError> {
        let record = self
            .posts
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!(post_id = %id, "failed to fetch post: {}", e);
                GetPostError::QueryFailed(e.to_string())
            })?
            .ok_or(GetPostError::PostNotFound)?;

        load_posts_response(&self.posts, &self.users, vec![record])
            .await
            .map_err(|e| {
                error!(post_id = %id, "failed to load post details: {}", e);
                GetPostError::QueryFailed(e.to_string())
            })
    }
}
