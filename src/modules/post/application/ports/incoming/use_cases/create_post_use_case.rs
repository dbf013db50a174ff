use async_trait::async_trait;

use crate::post::application::{
    assembler::PostView,
    domain::{
        content::{extract_hashtags, extract_mentions},
        entities::{PostId, CONTENT_MAX_LEN},
    },
};
use crate::tag::application::domain::entities::{normalize_tag, TagTextError};
use crate::user::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Create Post Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    author: UserId,
    content: String,
    parent: Option<PostId>,
    tags: Vec<String>,
    mentions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreatePostCommandError {
    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Content must not exceed 1000 characters")]
    ContentTooLong,

    #[error("Invalid tag '{tag}': {reason}")]
    InvalidTag { tag: String, reason: TagTextError },
}

impl CreatePostCommand {
    /// Explicit tags come first, then hashtags found in the content, all
    /// normalized and deduplicated.
    pub fn new(
        author: UserId,
        content: &str,
        parent: Option<PostId>,
        tags: &[String],
    ) -> Result<Self, CreatePostCommandError> {
        let content = content.trim().to_string();

        if content.is_empty() {
            return Err(CreatePostCommandError::EmptyContent);
        }
        if content.chars().count() > CONTENT_MAX_LEN {
            return Err(CreatePostCommandError::ContentTooLong);
        }

        let mut merged: Vec<String> = Vec::new();
        for raw in tags {
            let tag = normalize_tag(raw).map_err(|reason| CreatePostCommandError::InvalidTag {
                tag: raw.clone(),
                reason,
            })?;
            if !merged.contains(&tag) {
                merged.push(tag);
            }
        }
        for tag in extract_hashtags(&content) {
            if !merged.contains(&tag) {
                merged.push(tag);
            }
        }

        let mentions = extract_mentions(&content);

        Ok(Self {
            author,
            content,
            parent,
            tags: merged,
            mentions,
        })
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn parent(&self) -> Option<PostId> {
        self.parent
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn mentions(&self) -> &[String] {
        &self.mentions
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Author not found")]
    AuthorNotFound,

    #[error("Parent post not found")]
    ParentNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, command: CreatePostCommand) -> Result<PostView, CreatePostError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_explicit_tags_and_hashtags() {
        let cmd = CreatePostCommand::new(
            UserId::new(),
            "Sunset over the lake #Nature #photography",
            None,
            &["#travel".to_string(), "nature".to_string()],
        )
        .unwrap();

        assert_eq!(cmd.tags(), &["travel", "nature", "photography"]);
    }

    #[test]
    fn collects_mentions() {
        let cmd = CreatePostCommand::new(
            UserId::new(),
            "Thanks @jdoe and @paula_g!",
            None,
            &[],
        )
        .unwrap();

        assert_eq!(cmd.mentions(), &["jdoe", "paula_g"]);
    }

    #[test]
    fn trims_content() {
        let cmd = CreatePostCommand::new(UserId::new(), "  hello  ", None, &[]).unwrap();
        assert_eq!(cmd.content(), "hello");
    }

    #[test]
    fn rejects_blank_content() {
        let result = CreatePostCommand::new(UserId::new(), "   ", None, &[]);
        assert_eq!(result.unwrap_err(), CreatePostCommandError::EmptyContent);
    }

    #[test]
    fn rejects_long_content() {
        let result = CreatePostCommand::new(UserId::new(), &"x".repeat(1001), None, &[]);
        assert_eq!(result.unwrap_err(), CreatePostCommandError::ContentTooLong);
    }

    #[test]
    fn rejects_invalid_explicit_tag() {
        let result = CreatePostCommand::new(
            UserId::new(),
            "hello",
            None,
            &["rock-n-roll".to_string()],
        );

        assert!(matches!(
            result,
            Err(CreatePostCommandError::InvalidTag {
                reason: TagTextError::InvalidCharacters,
                ..
            })
        ));
    }
}
