use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::post::application::domain::entities::{PostId, PostRecord};
use crate::user::application::domain::entities::{UserId, UserSummary};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the post store. Listings return active posts only.
#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> Result<Option<PostRecord>, PostQueryError>;

    /// Newest first.
    async fn list_recent(&self, limit: u64) -> Result<Vec<PostRecord>, PostQueryError>;

    /// Newest first.
    async fn list_by_author(
        &self,
        author: UserId,
        limit: u64,
    ) -> Result<Vec<PostRecord>, PostQueryError>;

    /// Distinct posts linked to the tag, newest first.
    async fn list_by_tag(&self, tag_id: Uuid, limit: u64)
        -> Result<Vec<PostRecord>, PostQueryError>;

    /// Direct children, oldest first.
    async fn list_replies(
        &self,
        parent: PostId,
        limit: u64,
    ) -> Result<Vec<PostRecord>, PostQueryError>;

    /// Newest first.
    async fn list_mentioning(
        &self,
        user: UserId,
        limit: u64,
    ) -> Result<Vec<PostRecord>, PostQueryError>;

    // ────────────────────────────────────────────────────────
    // Batched aggregates over a page of ids. Ids without rows
    // are absent from the map.
    // ────────────────────────────────────────────────────────

    async fn like_counts(&self, ids: &[PostId]) -> Result<HashMap<PostId, u64>, PostQueryError>;

    async fn reply_counts(&self, ids: &[PostId]) -> Result<HashMap<PostId, u64>, PostQueryError>;

    /// Tag texts per post, alphabetical.
    async fn tags_for(&self, ids: &[PostId])
        -> Result<HashMap<PostId, Vec<String>>, PostQueryError>;

    /// Active users who liked the post, earliest like first.
    async fn list_likers(
        &self,
        post: PostId,
        limit: u64,
    ) -> Result<Vec<UserSummary>, PostQueryError>;
}
