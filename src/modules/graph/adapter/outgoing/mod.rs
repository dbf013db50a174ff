mod graph_store_postgres;
pub mod sea_orm_entity;

pub use graph_store_postgres::GraphStorePostgres;
