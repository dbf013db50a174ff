use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::shared::persistence::RecordStatus;
use crate::user::application::domain::entities::{User, UserId, UserRef, UserSummary};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub username: String,

    pub display_name: String,

    pub biography: String,

    pub verified: bool,

    pub status: RecordStatus,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_user(&self) -> User {
        User {
            id: UserId::from(self.id),
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            biography: self.biography.clone(),
            verified: self.verified,
            created_at: self.created_at.with_timezone(&Utc),
        }
    }

    pub fn to_summary(&self) -> UserSummary {
        UserSummary {
            id: UserId::from(self.id),
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            verified: self.verified,
        }
    }

    pub fn to_user_ref(&self) -> UserRef {
        UserRef {
            id: UserId::from(self.id),
            username: self.username.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_pictures::Entity")]
    Pictures,
}

impl Related<super::user_pictures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pictures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
