use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::user::application::{
    domain::entities::{PictureKind, UserId},
    ports::outgoing::{PictureQuery, PictureQueryError},
};

use super::sea_orm_entity::user_pictures::{Column as PictureColumn, Entity as PictureEntity};

#[derive(Debug, Clone)]
pub struct PictureQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PictureQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PictureQuery for PictureQueryPostgres {
    async fn latest_url(
        &self,
        user: UserId,
        kind: PictureKind,
    ) -> Result<Option<String>, PictureQueryError> {
        let model = PictureEntity::find()
            .filter(PictureColumn::UserId.eq(user.value()))
            .filter(PictureColumn::Kind.eq(kind))
            .order_by_desc(PictureColumn::LastUpdated)
            .one(&*self.db)
            .await
            .map_err(|e| PictureQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.url))
    }
}
