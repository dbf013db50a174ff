mod tag_query;

pub use tag_query::{TagQuery, TagQueryError};
