use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialEdges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialEdges::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SocialEdges::FromUser).uuid().not_null())
                    .col(ColumnDef::new(SocialEdges::ToUser).uuid().not_null())
                    .col(ColumnDef::new(SocialEdges::Label).string_len(32).not_null())
                    .col(
                        ColumnDef::new(SocialEdges::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_edges_from_user")
                            .from(SocialEdges::Table, SocialEdges::FromUser)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_edges_to_user")
                            .from(SocialEdges::Table, SocialEdges::ToUser)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one edge per (from, to, label). Inserts rely on this
        // constraint through ON CONFLICT DO NOTHING.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_social_edges_unique
                ON social_edges (from_user, to_user, label);
                "#,
            )
            .await?;

        // Inbound traversal
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_social_edges_to_user
                ON social_edges (to_user, label);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_social_edges_unique;
                DROP INDEX IF EXISTS idx_social_edges_to_user;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SocialEdges::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SocialEdges {
    Table,
    Id,
    FromUser,
    ToUser,
    Label,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
