use async_trait::async_trait;
use tracing::error;

use crate::tag::application::{
    domain::entities::{normalize_tag, Tag},
    ports::{
        incoming::use_cases::{GetTagError, GetTagUseCase},
        outgoing::TagQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetTagService<T>
where
    T: TagQuery + Send + Sync,
{
    tags: T,
}

impl<T> GetTagService<T>
where
    T: TagQuery + Send + Sync,
{
    pub fn new(tags: T) -> Self {
        Self { tags }
    }
}

#[async_trait]
impl<T> GetTagUseCase for GetTagService<T>
where
    T: TagQuery + Send + Sync,
{
    async fn execute(&self, text: &str) -> Result<Tag, GetTagError> {
        // Text that cannot be a tag cannot exist either.
        let text = normalize_tag(text).map_err(|_| GetTagError::TagNotFound)?;

        self.tags
            .find_by_text(&text)
            .await
            .map_err(|e| {
                error!(tag = %text, "failed to fetch tag: {}", e);
                GetTagError::QueryFailed(e.to_string())
            })?
            .ok_or(GetTagError::TagNotFound)
    }
}
