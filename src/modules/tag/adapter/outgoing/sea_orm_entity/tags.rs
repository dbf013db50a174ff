use sea_orm::entity::prelude::*;

use crate::tag::application::domain::entities::Tag;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub text: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_tag(&self) -> Tag {
        Tag {
            id: self.id,
            text: self.text.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
