mod picture_query_postgres;
pub mod sea_orm_entity;
mod user_query_postgres;
mod user_repository_postgres;

pub use picture_query_postgres::PictureQueryPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
