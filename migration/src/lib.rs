pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users_table;
mod m20250601_000002_create_user_pictures_table;
mod m20250601_000003_create_posts_table;
mod m20250601_000004_create_tags_table;
mod m20250601_000005_create_post_tags_table;
mod m20250601_000006_create_post_likes_table;
mod m20250601_000007_create_post_mentions_table;
mod m20250601_000008_create_social_edges_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users_table::Migration),
            Box::new(m20250601_000002_create_user_pictures_table::Migration),
            Box::new(m20250601_000003_create_posts_table::Migration),
            Box::new(m20250601_000004_create_tags_table::Migration),
            Box::new(m20250601_000005_create_post_tags_table::Migration),
            Box::new(m20250601_000006_create_post_likes_table::Migration),
            Box::new(m20250601_000007_create_post_mentions_table::Migration),
            Box::new(m20250601_000008_create_social_edges_table::Migration),
        ]
    }
}
