use async_trait::async_trait;

use crate::post::application::assembler::PostView;

pub const TAG_POSTS_LIMIT: u64 = 100;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPostsByTagError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Unknown tags yield an empty list.
#[async_trait]
pub trait ListPostsByTagUseCase: Send + Sync {
    async fn execute(
        &self,
        text: &str,
        limit: Option<u64>,
    ) -> Result<Vec<PostView>, ListPostsByTagError>;
}
