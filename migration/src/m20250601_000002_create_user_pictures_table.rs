use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPictures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserPictures::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserPictures::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserPictures::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(UserPictures::Url).text().not_null())
                    .col(
                        ColumnDef::new(UserPictures::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_pictures_user_id")
                            .from(UserPictures::Table, UserPictures::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Latest picture of a kind for a user
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_user_pictures_user_kind
                ON user_pictures (user_id, kind, last_updated DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_user_pictures_user_kind")
            .await?;

        manager
            .drop_table(Table::drop().table(UserPictures::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserPictures {
    Table,
    Id,
    UserId,
    Kind,
    Url,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
