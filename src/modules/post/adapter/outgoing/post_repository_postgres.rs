use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, QueryResult, Set, Statement,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::post::application::{
    domain::entities::{PostId, PostRecord},
    ports::outgoing::{NewPostData, PostRepository, PostRepositoryError},
};
use crate::shared::persistence::{is_unique_violation, RecordStatus};
use crate::tag::adapter::outgoing::sea_orm_entity::tags::{
    ActiveModel as TagActiveModel, Column as TagColumn, Entity as TagEntity,
};
use crate::user::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::user::application::domain::entities::UserId;

use super::sea_orm_entity::{
    post_mentions::{ActiveModel as MentionActiveModel, Entity as MentionEntity},
    post_tags::{ActiveModel as PostTagActiveModel, Entity as PostTagEntity},
    posts::{ActiveModel as PostActiveModel, Column as PostColumn, Entity as PostEntity},
};

#[derive(Debug, Clone)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

fn db_err(e: DbErr) -> PostRepositoryError {
    PostRepositoryError::DatabaseError(e.to_string())
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // create_post steps (all inside one transaction)
    // =====================================================

    async fn write_post(
        txn: &DatabaseTransaction,
        data: NewPostData,
    ) -> Result<PostRecord, PostRepositoryError> {
        let author = UserEntity::find_by_id(data.author.value())
            .filter(UserColumn::Status.eq(RecordStatus::Active))
            .one(txn)
            .await
            .map_err(db_err)?;
        if author.is_none() {
            return Err(PostRepositoryError::AuthorNotFound);
        }

        if let Some(parent) = data.parent {
            let parent = PostEntity::find_by_id(parent.value())
                .filter(PostColumn::Status.eq(RecordStatus::Active))
                .one(txn)
                .await
                .map_err(db_err)?;
            if parent.is_none() {
                return Err(PostRepositoryError::ParentNotFound);
            }
        }

        let now = Utc::now().fixed_offset();

        let post = PostActiveModel {
            id: Set(data.id.value()),
            author_id: Set(data.author.value()),
            parent_post_id: Set(data.parent.map(|p| p.value())),
            content: Set(data.content),
            reshare_count: Set(0),
            status: Set(RecordStatus::Active),
            created_at: Set(now),
        }
        .insert(txn)
        .await
        .map_err(db_err)?;

        if !data.tags.is_empty() {
            Self::link_tags(txn, post.id, &data.tags).await?;
        }

        if !data.mentions.is_empty() {
            Self::link_mentions(txn, post.id, &data.mentions).await?;
        }

        Ok(post.to_record())
    }

    /// Upserts tags by text, then links every one of them to the post.
    async fn link_tags(
        txn: &DatabaseTransaction,
        post_id: Uuid,
        tags: &[String],
    ) -> Result<(), PostRepositoryError> {
        let now = Utc::now().fixed_offset();

        TagEntity::insert_many(tags.iter().map(|text| TagActiveModel {
            id: Set(Uuid::new_v4()),
            text: Set(text.clone()),
            created_at: Set(now),
        }))
        .on_conflict(OnConflict::column(TagColumn::Text).do_nothing().to_owned())
        .exec_without_returning(txn)
        .await
        .map_err(db_err)?;

        let stored = TagEntity::find()
            .filter(TagColumn::Text.is_in(tags.iter().cloned()))
            .all(txn)
            .await
            .map_err(db_err)?;

        if stored.is_empty() {
            return Ok(());
        }

        PostTagEntity::insert_many(stored.iter().map(|tag| PostTagActiveModel {
            post_id: Set(post_id),
            tag_id: Set(tag.id),
        }))
        .exec_without_returning(txn)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    /// Unknown or deleted usernames are dropped.
    async fn link_mentions(
        txn: &DatabaseTransaction,
        post_id: Uuid,
        usernames: &[String],
    ) -> Result<(), PostRepositoryError> {
        let users = UserEntity::find()
            .filter(UserColumn::Username.is_in(usernames.iter().cloned()))
            .filter(UserColumn::Status.eq(RecordStatus::Active))
            .all(txn)
            .await
            .map_err(db_err)?;

        if users.is_empty() {
            return Ok(());
        }

        MentionEntity::insert_many(users.iter().map(|user| MentionActiveModel {
            post_id: Set(post_id),
            user_id: Set(user.id),
        }))
        .exec_without_returning(txn)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    // =====================================================
    // like_post SQL
    // =====================================================

    /// Guarded insert:
    /// - post and user must be active
    /// - on conflict (post_id, user_id) do nothing
    fn guarded_like_stmt(post: PostId, user: UserId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO post_likes (post_id, user_id, created_at)
            SELECT p.id, u.id, $3
            FROM posts p
            JOIN users u
              ON u.id = $2
             AND u.status = 'active'
            WHERE p.id = $1
              AND p.status = 'active'
            ON CONFLICT (post_id, user_id) DO NOTHING
            "#,
            vec![
                post.value().into(),
                user.value().into(),
                Utc::now().fixed_offset().into(),
            ],
        )
    }

    fn like_probe_stmt(post: PostId, user: UserId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              EXISTS (
                SELECT 1 FROM posts p
                WHERE p.id = $1 AND p.status = 'active'
              ) AS post_ok,
              EXISTS (
                SELECT 1 FROM users u
                WHERE u.id = $2 AND u.status = 'active'
              ) AS user_ok,
              EXISTS (
                SELECT 1 FROM post_likes l
                WHERE l.post_id = $1 AND l.user_id = $2
              ) AS like_exists
            "#,
            vec![post.value().into(), user.value().into()],
        )
    }

    fn map_like_err(e: DbErr) -> PostRepositoryError {
        if is_unique_violation(&e) {
            PostRepositoryError::AlreadyLiked
        } else {
            db_err(e)
        }
    }

    async fn resolve_like_failure(&self, post: PostId, user: UserId) -> PostRepositoryError {
        let row = match self.db.query_one(Self::like_probe_stmt(post, user)).await {
            Ok(Some(row)) => row,
            Ok(None) => {
                return PostRepositoryError::DatabaseError(
                    "Probe query returned no rows".to_string(),
                )
            }
            Err(e) => return db_err(e),
        };

        let (post_ok, user_ok, like_exists) = match Self::like_probe_flags(&row) {
            Ok(flags) => flags,
            Err(e) => return db_err(e),
        };

        if !post_ok {
            return PostRepositoryError::PostNotFound;
        }
        if !user_ok {
            return PostRepositoryError::UserNotFound;
        }
        if like_exists {
            return PostRepositoryError::AlreadyLiked;
        }

        PostRepositoryError::DatabaseError("Unexpected like resolution state".to_string())
    }

    fn like_probe_flags(row: &QueryResult) -> Result<(bool, bool, bool), DbErr> {
        Ok((
            row.try_get("", "post_ok")?,
            row.try_get("", "user_ok")?,
            row.try_get("", "like_exists")?,
        ))
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(&self, data: NewPostData) -> Result<PostRecord, PostRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        match Self::write_post(&txn, data).await {
            Ok(record) => {
                txn.commit().await.map_err(db_err)?;
                Ok(record)
            }
            Err(e) => {
                if let Err(rollback) = txn.rollback().await {
                    error!("rollback after failed post insert failed: {}", rollback);
                }
                Err(e)
            }
        }
    }

    async fn like_post(&self, post: PostId, user: UserId) -> Result<(), PostRepositoryError> {
        let result = self
            .db
            .execute(Self::guarded_like_stmt(post, user))
            .await
            .map_err(Self::map_like_err)?;

        if result.rows_affected() == 0 {
            return Err(self.resolve_like_failure(post, user).await);
        }

        Ok(())
    }

    async fn soft_delete_post(&self, id: PostId) -> Result<(), PostRepositoryError> {
        let result = PostEntity::update_many()
            .col_expr(PostColumn::Status, Expr::value(RecordStatus::Deleted))
            .filter(PostColumn::Id.eq(id.value()))
            .filter(PostColumn::Status.eq(RecordStatus::Active))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::PostNotFound);
        }

        Ok(())
    }
}
