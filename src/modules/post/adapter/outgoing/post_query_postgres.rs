use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Query},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::post::application::{
    domain::entities::{PostId, PostRecord},
    ports::outgoing::{PostQuery, PostQueryError},
};
use crate::shared::persistence::RecordStatus;
use crate::tag::adapter::outgoing::sea_orm_entity::tags::Column as TagColumn;
use crate::user::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::user::application::domain::entities::{UserId, UserSummary};

use super::sea_orm_entity::{
    post_likes::{self, Column as LikeColumn, Entity as LikeEntity},
    post_mentions::{Column as MentionColumn, Entity as MentionEntity},
    post_tags::{self, Column as PostTagColumn, Entity as PostTagEntity},
    posts::{Column as PostColumn, Entity as PostEntity},
};

#[derive(Debug, FromQueryResult)]
struct CountRow {
    post_id: Uuid,
    total: i64,
}

#[derive(Debug, FromQueryResult)]
struct TagRow {
    post_id: Uuid,
    text: String,
}

#[derive(Debug, Clone)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active() -> Select<PostEntity> {
        PostEntity::find().filter(PostColumn::Status.eq(RecordStatus::Active))
    }

    async fn fetch(&self, select: Select<PostEntity>) -> Result<Vec<PostRecord>, PostQueryError> {
        let models = select.all(&*self.db).await.map_err(db_err)?;
        Ok(models.iter().map(|m| m.to_record()).collect())
    }
}

fn db_err(e: DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}

fn raw_ids(ids: &[PostId]) -> Vec<Uuid> {
    ids.iter().map(|id| id.value()).collect()
}

fn to_counts(rows: Vec<CountRow>) -> HashMap<PostId, u64> {
    rows.into_iter()
        .map(|r| (PostId::from(r.post_id), u64::try_from(r.total).unwrap_or(0)))
        .collect()
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn find_by_id(&self, id: PostId) -> Result<Option<PostRecord>, PostQueryError> {
        let model = Self::active()
            .filter(PostColumn::Id.eq(id.value()))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| m.to_record()))
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<PostRecord>, PostQueryError> {
        self.fetch(Self::active().order_by_desc(PostColumn::Id).limit(limit))
            .await
    }

    async fn list_by_author(
        &self,
        author: UserId,
        limit: u64,
    ) -> Result<Vec<PostRecord>, PostQueryError> {
        self.fetch(
            Self::active()
                .filter(PostColumn::AuthorId.eq(author.value()))
                .order_by_desc(PostColumn::Id)
                .limit(limit),
        )
        .await
    }

    async fn list_by_tag(
        &self,
        tag_id: Uuid,
        limit: u64,
    ) -> Result<Vec<PostRecord>, PostQueryError> {
        // IN (subquery) keeps each post once however the join fans out.
        let tagged = Query::select()
            .column(PostTagColumn::PostId)
            .from(PostTagEntity)
            .and_where(PostTagColumn::TagId.eq(tag_id))
            .to_owned();

        self.fetch(
            Self::active()
                .filter(PostColumn::Id.in_subquery(tagged))
                .order_by_desc(PostColumn::Id)
                .limit(limit),
        )
        .await
    }

    async fn list_replies(
        &self,
        parent: PostId,
        limit: u64,
    ) -> Result<Vec<PostRecord>, PostQueryError> {
        self.fetch(
            Self::active()
                .filter(PostColumn::ParentPostId.eq(parent.value()))
                .order_by_asc(PostColumn::Id)
                .limit(limit),
        )
        .await
    }

    async fn list_mentioning(
        &self,
        user: UserId,
        limit: u64,
    ) -> Result<Vec<PostRecord>, PostQueryError> {
        let mentioning = Query::select()
            .column(MentionColumn::PostId)
            .from(MentionEntity)
            .and_where(MentionColumn::UserId.eq(user.value()))
            .to_owned();

        self.fetch(
            Self::active()
                .filter(PostColumn::Id.in_subquery(mentioning))
                .order_by_desc(PostColumn::Id)
                .limit(limit),
        )
        .await
    }

    async fn like_counts(&self, ids: &[PostId]) -> Result<HashMap<PostId, u64>, PostQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        // Likes of deleted users are not counted, matching list_likers.
        let rows = LikeEntity::find()
            .select_only()
            .column(LikeColumn::PostId)
            .column_as(Expr::col((LikeEntity, LikeColumn::UserId)).count(), "total")
            .join(JoinType::InnerJoin, post_likes::Relation::User.def())
            .filter(UserColumn::Status.eq(RecordStatus::Active))
            .filter(LikeColumn::PostId.is_in(raw_ids(ids)))
            .group_by(LikeColumn::PostId)
            .into_model::<CountRow>()
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(to_counts(rows))
    }

    async fn reply_counts(&self, ids: &[PostId]) -> Result<HashMap<PostId, u64>, PostQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = PostEntity::find()
            .select_only()
            .column_as(PostColumn::ParentPostId, "post_id")
            .column_as(Expr::col((PostEntity, PostColumn::Id)).count(), "total")
            .filter(PostColumn::ParentPostId.is_in(raw_ids(ids)))
            .filter(PostColumn::Status.eq(RecordStatus::Active))
            .group_by(PostColumn::ParentPostId)
            .into_model::<CountRow>()
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(to_counts(rows))
    }

    async fn tags_for(
        &self,
        ids: &[PostId],
    ) -> Result<HashMap<PostId, Vec<String>>, PostQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = PostTagEntity::find()
            .select_only()
            .column(PostTagColumn::PostId)
            .column(TagColumn::Text)
            .join(JoinType::InnerJoin, post_tags::Relation::Tag.def())
            .filter(PostTagColumn::PostId.is_in(raw_ids(ids)))
            .order_by_asc(TagColumn::Text)
            .into_model::<TagRow>()
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let mut tags: HashMap<PostId, Vec<String>> = HashMap::new();
        for row in rows {
            tags.entry(PostId::from(row.post_id))
                .or_default()
                .push(row.text);
        }
        Ok(tags)
    }

    async fn list_likers(
        &self,
        post: PostId,
        limit: u64,
    ) -> Result<Vec<UserSummary>, PostQueryError> {
        let models = UserEntity::find()
            .join_rev(JoinType::InnerJoin, post_likes::Relation::User.def())
            .filter(LikeColumn::PostId.eq(post.value()))
            .filter(UserColumn::Status.eq(RecordStatus::Active))
            .order_by_asc(LikeColumn::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(models.iter().map(|m| m.to_summary()).collect())
    }
}
