use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::post::application::{
    assembler::PostView,
    domain::entities::PostId,
    ports::{
        incoming::use_cases::{CreatePostCommand, CreatePostError, CreatePostUseCase},
        outgoing::{NewPostData, PostRepository, PostRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePostUseCase for CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, command: CreatePostCommand) -> Result<PostView, CreatePostError> {
        let data = NewPostData {
            id: PostId::new(),
            author: command.author(),
            parent: command.parent(),
            content: command.content().to_string(),
            tags: command.tags().to_vec(),
            mentions: command.mentions().to_vec(),
        };

        let record = match self.repository.create_post(data).await {
            Ok(record) => record,
            Err(PostRepositoryError::AuthorNotFound) => {
                warn!(author_id = %command.author(), "post rejected: unknown author");
                return Err(CreatePostError::AuthorNotFound);
            }
            Err(PostRepositoryError::ParentNotFound) => {
                warn!(author_id = %command.author(), "post rejected: unknown parent");
                return Err(CreatePostError::ParentNotFound);
            }
            Err(e) => {
                error!(author_id = %command.author(), "failed to create post: {}", e);
                return Err(CreatePostError::RepositoryError(e.to_string()));
            }
        };

        info!(post_id = %record.id, author_id = %record.author, "post created");

        let mut tags = command.tags().to_vec();
        tags.sort();

        Ok(PostView {
            id: record.id,
            content: record.content,
            likes: 0,
            replies: 0,
            reshares: record.reshares,
            author: record.author,
            parent: record.parent,
            tags,
            created_at: record.created_at,
        })
    }
}
