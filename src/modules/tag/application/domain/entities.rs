use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub const TAG_MAX_LEN: usize = 64;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_]+$").expect("tag pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Tag {
    pub id: Uuid,
    #[schema(example = "nature")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagTextError {
    #[error("Tag cannot be empty")]
    Empty,

    #[error("Tag must not exceed 64 characters")]
    TooLong,

    #[error("Tag may only contain letters, digits and '_'")]
    InvalidCharacters,
}

/// Canonical form of a tag: one leading `#` stripped, surrounding
/// whitespace removed, lowercased.
pub fn normalize_tag(raw: &str) -> Result<String, TagTextError> {
    let trimmed = raw.trim();
    let text = trimmed.strip_prefix('#').unwrap_or(trimmed).to_lowercase();

    if text.is_empty() {
        return Err(TagTextError::Empty);
    }
    if text.chars().count() > TAG_MAX_LEN {
        return Err(TagTextError::TooLong);
    }
    if !TAG_PATTERN.is_match(&text) {
        return Err(TagTextError::InvalidCharacters);
    }

    Ok(text)
}
