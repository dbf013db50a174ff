use async_trait::async_trait;

use crate::post::application::domain::entities::{PostId, PostRecord};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Author not found")]
    AuthorNotFound,

    #[error("Parent post not found")]
    ParentNotFound,

    #[error("Post not found")]
    PostNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Post to be written together with its tag links and mentions.
/// `tags` are normalized texts; `mentions` are usernames, unknown ones are
/// dropped by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPostData {
    pub id: PostId,
    pub author: UserId,
    pub parent: Option<PostId>,
    pub content: String,
    pub tags: Vec<String>,
    pub mentions: Vec<String>,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Writes the post, its tags and mentions in one transaction.
    async fn create_post(&self, data: NewPostData) -> Result<PostRecord, PostRepositoryError>;

    async fn like_post(&self, post: PostId, user: UserId) -> Result<(), PostRepositoryError>;

    async fn soft_delete_post(&self, id: PostId) -> Result<(), PostRepositoryError>;
}
