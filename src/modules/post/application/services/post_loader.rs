//! Two-phase fetch: the caller loads a page of post records, these helpers
//! add one batched query per include (likes, replies, tags, authors).

use crate::post::application::{
    assembler::{
        assemble_posts, assemble_response, distinct_authors, PostAggregates, PostView,
        PostsResponse,
    },
    domain::entities::{PostId, PostRecord},
    ports::outgoing::{PostQuery, PostQueryError},
};
use crate::user::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadPostsError {
    #[error(transparent)]
    Posts(#[from] PostQueryError),

    #[error(transparent)]
    Users(#[from] UserQueryError),
}

pub async fn load_post_views<Q>(
    query: &Q,
    records: Vec<PostRecord>,
) -> Result<Vec<PostView>, PostQueryError>
where
    Q: PostQuery + ?Sized,
{
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<PostId> = records.iter().map(|r| r.id).collect();

    let aggregates = PostAggregates {
        likes: query.like_counts(&ids).await?,
        replies: query.reply_counts(&ids).await?,
        tags: query.tags_for(&ids).await?,
    };

    Ok(assemble_posts(records, aggregates))
}

/// Posts plus the deduplicated summaries of their active authors.
pub async fn load_posts_response<Q, U>(
    query: &Q,
    users: &U,
    records: Vec<PostRecord>,
) -> Result<PostsResponse, LoadPostsError>
where
    Q: PostQuery + ?Sized,
    U: UserQuery + ?Sized,
{
    let author_ids = distinct_authors(&records);
    let posts = load_post_views(query, records).await?;

    let authors = if author_ids.is_empty() {
        Vec::new()
    } else {
        users.find_summaries(&author_ids).await?
    };

    Ok(assemble_response(posts, authors))
}
