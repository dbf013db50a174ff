//! Builds API views of posts from store records plus batched aggregates.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use utoipa::ToSchema;

use crate::post::application::domain::entities::{PostId, PostRecord};
use crate::user::application::domain::entities::{UserId, UserSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: PostId,
    #[schema(example = "Just finished a great hike in the mountains! #nature")]
    pub content: String,
    pub likes: u64,
    pub replies: u64,
    pub reshares: u32,
    pub author: UserId,
    pub parent: Option<PostId>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A page of posts with the authors they reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PostsResponse {
    pub posts: Vec<PostView>,
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Default)]
pub struct PostAggregates {
    pub likes: HashMap<PostId, u64>,
    pub replies: HashMap<PostId, u64>,
    pub tags: HashMap<PostId, Vec<String>>,
}

/// Keeps record order. Posts without aggregate rows get zero counts and
/// no tags.
pub fn assemble_posts(records: Vec<PostRecord>, mut aggregates: PostAggregates) -> Vec<PostView> {
    records
        .into_iter()
        .map(|r| PostView {
            likes: aggregates.likes.get(&r.id).copied().unwrap_or(0),
            replies: aggregates.replies.get(&r.id).copied().unwrap_or(0),
            tags: aggregates.tags.remove(&r.id).unwrap_or_default(),
            id: r.id,
            content: r.content,
            reshares: r.reshares,
            author: r.author,
            parent: r.parent,
            created_at: r.created_at,
        })
        .collect()
}

/// Author ids in order of first appearance.
pub fn distinct_authors(records: &[PostRecord]) -> Vec<UserId> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.author)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Orders `authors` by first appearance in `posts`. Summaries not referenced
/// by any post are dropped, and so are duplicates.
pub fn assemble_response(posts: Vec<PostView>, authors: Vec<UserSummary>) -> PostsResponse {
    let mut by_id: HashMap<UserId, UserSummary> =
        authors.into_iter().map(|u| (u.id, u)).collect();

    let users = posts
        .iter()
        .filter_map(|p| by_id.remove(&p.author))
        .collect();

    PostsResponse { posts, users }
}
