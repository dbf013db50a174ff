use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::post::application::domain::entities::{PostId, PostRecord};
use crate::shared::persistence::RecordStatus;
use crate::user::application::domain::entities::UserId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub author_id: Uuid,

    pub parent_post_id: Option<Uuid>,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub reshare_count: i32,

    pub status: RecordStatus,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> PostRecord {
        PostRecord {
            id: PostId::from(self.id),
            author: UserId::from(self.author_id),
            parent: self.parent_post_id.map(PostId::from),
            content: self.content.clone(),
            reshares: u32::try_from(self.reshare_count).unwrap_or(0),
            created_at: self.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::AuthorId",
        to = "crate::user::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Author,
}

impl ActiveModelBehavior for ActiveModel {}
