use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostMentions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PostMentions::PostId).uuid().not_null())
                    .col(ColumnDef::new(PostMentions::UserId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(PostMentions::PostId)
                            .col(PostMentions::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_mentions_post_id")
                            .from(PostMentions::Table, PostMentions::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_mentions_user_id")
                            .from(PostMentions::Table, PostMentions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_post_mentions_user_id
                ON post_mentions (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_post_mentions_user_id")
            .await?;

        manager
            .drop_table(Table::drop().table(PostMentions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PostMentions {
    Table,
    PostId,
    UserId,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
