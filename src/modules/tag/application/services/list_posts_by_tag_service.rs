use async_trait::async_trait;
use tracing::error;

use crate::post::application::{
    assembler::PostView, domain::entities::cap_limit, ports::outgoing::PostQuery,
    services::load_post_views,
};
use crate::tag::application::{
    domain::entities::normalize_tag,
    ports::{
        incoming::use_cases::{ListPostsByTagError, ListPostsByTagUseCase, TAG_POSTS_LIMIT},
        outgoing::TagQuery,
    },
};

#[derive(Debug, Clone)]
pub struct ListPostsByTagService<T, Q>
where
    T: TagQuery + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    tags: T,
    posts: Q,
}

impl<T, Q> ListPostsByTagService<T, Q>
where
    T: TagQuery + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    pub fn new(tags: T, posts: Q) -> Self {
        Self { tags, posts }
    }
}

fn query_failed(text: &str, e: impl std::fmt::Display) -> ListPostsByTagError {
    error!(tag = %text, "failed to list tagged posts: {}", e);
    ListPostsByTagError::QueryFailed(e.to_string())
}

#[async_trait]
impl<T, Q> ListPostsByTagUseCase for ListPostsByTagService<T, Q>
where
    T: TagQuery + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        text: &str,
        limit: Option<u64>,
    ) -> Result<Vec<PostView>, ListPostsByTagError> {
        let Ok(text) = normalize_tag(text) else {
            return Ok(Vec::new());
        };

        let tag = match self.tags.find_by_text(&text).await {
            Ok(Some(tag)) => tag,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => return Err(query_failed(&text, e)),
        };

        let records = self
            .posts
            .list_by_tag(tag.id, cap_limit(limit, TAG_POSTS_LIMIT))
            .await
            .map_err(|e| query_failed(&text, e))?;

        load_post_views(&self.posts, records)
            .await
            .map_err(|e| query_failed(&text, e))
    }
}
