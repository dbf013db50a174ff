use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::persistence::{is_unique_violation, RecordStatus};
use crate::user::application::{
    domain::entities::{UserId, UserRef},
    ports::outgoing::{CreateUserData, NewPictureData, UserRepository, UserRepositoryError},
};

use super::sea_orm_entity::{
    user_pictures::ActiveModel as PictureActiveModel,
    users::{ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity},
};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    if is_unique_violation(&e) {
        UserRepositoryError::UsernameAlreadyExists
    } else {
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserRef, UserRepositoryError> {
        // The partial unique index on active usernames is the arbiter; no
        // read-before-write.
        let model = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            display_name: Set(data.display_name),
            biography: Set(data.biography),
            verified: Set(data.verified),
            status: Set(RecordStatus::Active),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(model.to_user_ref())
    }

    async fn soft_delete_user(&self, id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::Status, Expr::value(RecordStatus::Deleted))
            .filter(UserColumn::Id.eq(id.value()))
            .filter(UserColumn::Status.eq(RecordStatus::Active))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }

    async fn add_picture(&self, data: NewPictureData) -> Result<(), UserRepositoryError> {
        PictureActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user.value()),
            kind: Set(data.kind),
            url: Set(data.url),
            last_updated: Set(Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
