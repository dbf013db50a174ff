use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::user::application::domain::entities::UserId;

/// Edge labels of the social graph. Only `follows` exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "lowercase")]
pub enum EdgeLabel {
    #[sea_orm(string_value = "follows")]
    Follows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Edges leaving the vertex (who the user follows)
    Outbound,
    /// Edges entering the vertex (who follows the user)
    Inbound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: Uuid,
    pub from: UserId,
    pub to: UserId,
    pub label: EdgeLabel,
    pub created_at: DateTime<Utc>,
}

impl Edge {
    /// The vertex at the far end when walking in `direction`.
    pub fn neighbour(&self, direction: Direction) -> UserId {
        match direction {
            Direction::Outbound => self.to,
            Direction::Inbound => self.from,
        }
    }

    pub fn to_ref(&self) -> EdgeRef {
        EdgeRef {
            id: self.id,
            from: self.from,
            to: self.to,
            label: self.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EdgeRef {
    pub id: Uuid,
    pub from: UserId,
    pub to: UserId,
    pub label: EdgeLabel,
}
