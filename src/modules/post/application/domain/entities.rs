use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::user::application::domain::entities::UserId;

pub const CONTENT_MAX_LEN: usize = 1000;

/// Time-sortable post id (UUIDv7): ordering by id is ordering by creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = String, format = Uuid)]
pub struct PostId(Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn parse(raw: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(raw.trim()).map(Self)
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored post as read from the entity store. Derived counts are
/// computed separately at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub id: PostId,
    pub author: UserId,
    pub parent: Option<PostId>,
    pub content: String,
    pub reshares: u32,
    pub created_at: DateTime<Utc>,
}

/// Caps a caller supplied limit at `max`.
pub fn cap_limit(requested: Option<u64>, max: u64) -> u64 {
    requested.unwrap_or(max).min(max)
}
