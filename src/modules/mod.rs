pub mod graph;
pub mod post;
pub mod tag;
pub mod user;
