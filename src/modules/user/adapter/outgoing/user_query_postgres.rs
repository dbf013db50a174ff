use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::shared::persistence::RecordStatus;
use crate::user::application::{
    domain::entities::{User, UserId, UserSummary},
    ports::outgoing::{UserQuery, UserQueryError},
};

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find_by_id(id.value())
            .filter(UserColumn::Status.eq(RecordStatus::Active))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_user()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .filter(UserColumn::Status.eq(RecordStatus::Active))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_user()))
    }

    async fn find_summaries(&self, ids: &[UserId]) -> Result<Vec<UserSummary>, UserQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = UserEntity::find()
            .filter(UserColumn::Id.is_in(ids.iter().map(|id| id.value())))
            .filter(UserColumn::Status.eq(RecordStatus::Active))
            .order_by_asc(UserColumn::Username)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_summary()).collect())
    }
}
