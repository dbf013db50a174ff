use async_trait::async_trait;
use tracing::error;

use crate::post::application::{
    assembler::{PostView, PostsResponse},
    domain::entities::{cap_limit, PostId, PostRecord},
    ports::{
        incoming::use_cases::{
            ListMentionsUseCase, ListPostsByAuthorUseCase, ListPostsError, ListRecentPostsUseCase,
            ListRepliesUseCase, AUTHOR_POSTS_LIMIT, MENTIONS_LIMIT, RECENT_POSTS_LIMIT,
            REPLIES_LIMIT,
        },
        outgoing::{PostQuery, PostQueryError},
    },
    services::{load_post_views, load_posts_response},
};
use crate::user::application::{
    domain::entities::{validate_username, User, UserId},
    ports::outgoing::UserQuery,
};

/// Read-only post listings. One service backs all of them since they share
/// the same ports and loading steps.
#[derive(Debug, Clone)]
pub struct ListPostsService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    posts: Q,
    users: U,
}

impl<Q, U> ListPostsService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(posts: Q, users: U) -> Self {
        Self { posts, users }
    }

    async fn views(
        &self,
        records: Result<Vec<PostRecord>, PostQueryError>,
    ) -> Result<Vec<PostView>, ListPostsError> {
        let records = records.map_err(query_failed)?;
        load_post_views(&self.posts, records)
            .await
            .map_err(query_failed)
    }

    /// Accepts a user id or a username.
    async fn resolve_user(&self, key: &str) -> Result<User, ListPostsError> {
        let found = match UserId::parse(key) {
            Ok(id) => self.users.find_by_id(id).await,
            Err(_) => match validate_username(key) {
                Ok(username) => self.users.find_by_username(&username).await,
                Err(_) => return Err(ListPostsError::UserNotFound),
            },
        };

        found
            .map_err(query_failed)?
            .ok_or(ListPostsError::UserNotFound)
    }
}

fn query_failed(e: impl std::fmt::Display) -> ListPostsError {
    error!("failed to list posts: {}", e);
    ListPostsError::QueryFailed(e.to_string())
}

#[async_trait]
impl<Q, U> ListRecentPostsUseCase for ListPostsService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, limit: Option<u64>) -> Result<PostsResponse, ListPostsError> {
        let records = self
            .posts
            .list_recent(cap_limit(limit, RECENT_POSTS_LIMIT))
            .await
            .map_err(query_failed)?;

        load_posts_response(&self.posts, &self.users, records)
            .await
            .map_err(query_failed)
    }
}

#[async_trait]
impl<Q, U> ListPostsByAuthorUseCase for ListPostsService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, author: &str) -> Result<Vec<PostView>, ListPostsError> {
        let user = self.resolve_user(author).await?;
        let records = self
            .posts
            .list_by_author(user.id, AUTHOR_POSTS_LIMIT)
            .await;
        self.views(records).await
    }
}

#[async_trait]
impl<Q, U> ListRepliesUseCase for ListPostsService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        parent: PostId,
        limit: Option<u64>,
    ) -> Result<Vec<PostView>, ListPostsError> {
        self.posts
            .find_by_id(parent)
            .await
            .map_err(query_failed)?
            .ok_or(ListPostsError::PostNotFound)?;

        let records = self
            .posts
            .list_replies(parent, cap_limit(limit, REPLIES_LIMIT))
            .await;
        self.views(records).await
    }
}

#[async_trait]
impl<Q, U> ListMentionsUseCase for ListPostsService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        username: &str,
        limit: Option<u64>,
    ) -> Result<Vec<PostView>, ListPostsError> {
        let username = validate_username(username).map_err(|_| ListPostsError::UserNotFound)?;
        let user = self
            .users
            .find_by_username(&username)
            .await
            .map_err(query_failed)?
            .ok_or(ListPostsError::UserNotFound)?;

        let records = self
            .posts
            .list_mentioning(user.id, cap_limit(limit, MENTIONS_LIMIT))
            .await;
        self.views(records).await
    }
}
