use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::tag::application::{
    domain::entities::Tag,
    ports::outgoing::{TagQuery, TagQueryError},
};

use super::sea_orm_entity::tags::{Column as TagColumn, Entity as TagEntity};

#[derive(Debug, Clone)]
pub struct TagQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TagQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagQuery for TagQueryPostgres {
    async fn find_by_text(&self, text: &str) -> Result<Option<Tag>, TagQueryError> {
        let model = TagEntity::find()
            .filter(TagColumn::Text.eq(text))
            .one(&*self.db)
            .await
            .map_err(|e| TagQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_tag()))
    }
}
