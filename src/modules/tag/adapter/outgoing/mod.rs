pub mod sea_orm_entity;
mod tag_query_postgres;

pub use tag_query_postgres::TagQueryPostgres;
