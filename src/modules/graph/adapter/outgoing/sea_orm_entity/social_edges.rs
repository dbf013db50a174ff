use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::graph::application::domain::entities::{Edge, EdgeLabel};
use crate::user::application::domain::entities::UserId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "social_edges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub from_user: Uuid,

    pub to_user: Uuid,

    pub label: EdgeLabel,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_edge(&self) -> Edge {
        Edge {
            id: self.id,
            from: UserId::from(self.from_user),
            to: UserId::from(self.to_user),
            label: self.label,
            created_at: self.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::FromUser",
        to = "crate::user::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    FromUser,

    #[sea_orm(
        belongs_to = "crate::user::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::ToUser",
        to = "crate::user::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    ToUser,
}

impl ActiveModelBehavior for ActiveModel {}
